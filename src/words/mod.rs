use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;

static WORDS_DIR: Dir = include_dir!("src/words");

#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl WordList {
    pub fn new(file_name: String) -> Self {
        read_word_list_from_file(format!("{file_name}.json")).unwrap()
    }

    /// Pick a secret word for a new round.
    pub fn random_word(&self) -> String {
        self.words
            .choose(&mut rand::thread_rng())
            .expect("word list is empty")
            .clone()
    }
}

fn read_word_list_from_file(file_name: String) -> Result<WordList, Box<dyn Error>> {
    let file = WORDS_DIR
        .get_file(file_name)
        .expect("Word list file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let list = from_str(file_as_str).expect("Unable to deserialize word list json");

    Ok(list)
}
