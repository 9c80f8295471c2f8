use dotenvy::dotenv;
use ferrimusic::{client::AppleMusicClientBuilder, model::ResourceKind, prelude::*};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let client = AppleMusicClientBuilder::new(
        std::env::var("DEVELOPER_TOKEN").expect("Apple Music developer token not in environment"),
    )
    // a synchronous (blocking) client may be built with .build_sync() if the "sync" crate feature is enabled
    .build_async();

    let storefront = client.storefront("us").send_async().await.unwrap();
    println!("Storefront: {}", storefront["data"][0]["attributes"]["name"]);

    let charts = client
        .catalog_charts("us")
        .types([ResourceKind::Songs, ResourceKind::Albums])
        .limit(5)
        .send_async()
        .await
        .unwrap();

    println!("\nTop songs:");
    if let Some(songs) = charts["results"]["songs"][0]["data"].as_array() {
        for song in songs {
            println!(
                "{} - {} [{}]",
                song["attributes"]["artistName"], song["attributes"]["name"], song["id"]
            );
        }
    }

    let search_results = client
        .search("us", "james+brown", "artists,albums,songs")
        .limit(5)
        .send_async()
        .await
        .unwrap();

    println!("\nAlbums:");
    if let Some(albums) = search_results["results"]["albums"]["data"].as_array() {
        for album in albums {
            println!("{} [{}]", album["attributes"]["name"], album["id"]);
        }
    }

    let curator_playlists = client
        .catalog_curator_relationship("us", "976439448", "playlists")
        .expect("invalid curator relationship")
        .limit(3)
        .send_async()
        .await
        .unwrap();

    println!("\nCurator playlists: {}", curator_playlists["data"]);
}
