use dotenvy::dotenv;
use ferrimusic::{client::AppleMusicClientBuilder, prelude::*};

fn main() {
    dotenv().ok();
    env_logger::init();

    let client = AppleMusicClientBuilder::new(
        std::env::var("DEVELOPER_TOKEN").expect("Apple Music developer token not in environment"),
    )
    .build_sync();

    let album_id = std::env::args().nth(1).unwrap_or_else(|| String::from("310730204"));

    let album = client
        .catalog_album("us", &album_id)
        .include(["artists"])
        .send_sync()
        .unwrap();

    println!("{}", album["data"][0]["attributes"]["name"]);

    for song_id in client.song_ids_for_album("us", &album_id).send_sync().unwrap() {
        println!("{song_id}");
    }
}
