use dotenvy::dotenv;
use ferrimusic::{
    client::AppleMusicClientBuilder,
    model::{LibraryPlaylistCreationRequest, LibraryResource, LibraryResourceAddRequest, ResourceKind},
    prelude::*,
};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let client = AppleMusicClientBuilder::new(
        std::env::var("DEVELOPER_TOKEN").expect("Apple Music developer token not in environment"),
    )
    .music_user_token(std::env::var("MUSIC_USER_TOKEN").expect("Apple Music user token not in environment"))
    .build_async();

    let storefront = client.user_storefront().send_async().await.unwrap();
    println!("User storefront: {}", storefront["data"][0]["id"]);

    let recently_played = client.recently_played().limit(10).send_async().await.unwrap();
    println!("Recently played: {}", recently_played["data"]);

    let playlists = client.library_playlists().limit(50).send_async().await.unwrap();

    println!("\nPlaylists:");
    if let Some(playlists) = playlists["data"].as_array() {
        for playlist in playlists {
            println!("{} [{}]", playlist["attributes"]["name"], playlist["id"]);
        }
    }

    let mut add_request = LibraryResourceAddRequest::new();
    add_request.add_song(LibraryResource::new(ResourceKind::Songs, "203709340").unwrap());
    client.add_resources_to_library(&add_request).send_async().await.unwrap();

    let mut playlist = LibraryPlaylistCreationRequest::new("ferrimusic", "Created with ferrimusic");
    playlist.add_track(LibraryResource::new(ResourceKind::Songs, "203709340").unwrap());

    let created = client
        .create_library_playlist(&playlist)
        .unwrap()
        .send_async()
        .await
        .unwrap();

    let playlist_id = created["data"][0]["id"].as_str().unwrap();
    println!("\nCreated playlist {playlist_id}");

    client
        .add_tracks_to_library_playlist(playlist_id, [("songs", "201281527")])
        .unwrap()
        .send_async()
        .await
        .unwrap();
}
