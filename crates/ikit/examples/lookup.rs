//! Look up a keyword and print the first example sentence.
//!
//! Run with: `cargo run --example lookup -- 食べる`

use ikit::{ImmersionKitClient, SearchQuery};

#[tokio::main]
async fn main() -> ikit::Result<()> {
    let keyword = std::env::args().nth(1).unwrap_or_else(|| "食べる".to_string());

    let client = ImmersionKitClient::new();
    let query = SearchQuery::new(&keyword).min_length(12);
    let response = client.dictionary().look_up(&query).await?;

    let Some(example) = response.first_example() else {
        println!("No examples found for {keyword}");
        return Ok(());
    };

    println!("Sentence:    {}", example.sentence);
    println!("Furigana:    {}", example.sentence_with_furigana);
    println!("Translation: {}", example.translation);
    println!("Source:      {}", example.deck_name);
    println!("Audio:       {}", client.media().audio_url(&example.id));
    println!("Image:       {}", client.media().image_url(&example.id));

    Ok(())
}
