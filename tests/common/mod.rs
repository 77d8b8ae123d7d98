#![allow(dead_code)]

use quadbreak::alphabet::Alphabet;
use quadbreak::applier::KeyApplier;
use quadbreak::key::Key;

/// Several hundred words of ordinary English prose.
pub const SAMPLE_TEXT: &str = "\
The old harbour town had changed very little over the years. Every morning the \
fishing boats went out before the sun was up, and every evening they came back \
with their nets heavy and their crews tired. The people who lived there were \
careful with their money and generous with their time. They knew the names of \
their neighbours, and they knew the names of the boats that had been lost at sea. \
When the weather turned, the whole town would gather on the stone wall above the \
water and watch for the lights coming home through the rain.

In the middle of the town there was a small school with a green door and a bell \
that rang at nine o'clock. The schoolmistress was a patient woman who had come from the \
city many years before. She taught the children to read and to write, to count \
and to measure, and to think about the world beyond the hills. She told them that \
a question was worth more than an answer, because a good question could open a door \
that nobody had noticed before. Some of the children listened, and some of them \
looked out of the window at the gulls, but all of them remembered her.

One winter a stranger arrived on the last train of the evening. He carried a \
leather case full of papers and a small wooden box that he never opened in front \
of anyone. He took a room above the bakery and spent his days walking along the \
shore, writing in a notebook and stopping now and then to look at the rocks. The \
children followed him at a distance and made up stories about him. Some said he \
was a spy, and others said he was looking for buried treasure. The baker thought \
he was simply a man who needed a quiet place to rest.

In the spring the stranger gave a talk in the school hall. He explained that the \
rocks along the shore were older than anyone could imagine, and that they held a \
record of the sea and the weather going back for millions of years. He opened the \
wooden box at last and showed them a collection of stones, each one marked with \
the shape of a tiny creature that had lived and died long before there were people \
on the earth. The children were silent. For the first time they understood that \
their small town stood on the edge of a very long story, and that they were only \
the newest part of it. When the stranger left at the end of the summer, he gave \
the box to the school, and it remained there on a shelf near the window for as \
long as anyone could remember.";

pub fn corpus_words() -> Vec<String> {
    SAMPLE_TEXT
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

pub const SECRET_KEY: &str = "qwertyuiopasdfghjklzxcvbnm";

pub fn encrypt(text: &str, key: &str) -> String {
    KeyApplier::new(&Alphabet::english(), key)
        .expect("valid test key")
        .apply(text)
}

pub fn secret_key() -> Key {
    Key::parse(&Alphabet::english(), SECRET_KEY).expect("valid test key")
}
