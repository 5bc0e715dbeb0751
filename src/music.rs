use fridgechef_shared::Mood;
use serde::Serialize;
use url::form_urlencoded;

const SPOTIFY_SEARCH: &str = "https://open.spotify.com/search/";
const YOUTUBE_SEARCH: &str = "https://www.youtube.com/results?search_query=";

/// Playlist search links for cooking along to a mood.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicLinks {
    pub mood: Mood,
    pub spotify: String,
    pub youtube: String,
}

impl MusicLinks {
    pub fn for_mood(mood: Mood) -> Self {
        let query = encode_query(&format!("{mood} cooking playlist"));

        Self {
            mood,
            spotify: format!("{SPOTIFY_SEARCH}{query}"),
            youtube: format!("{YOUTUBE_SEARCH}{query}"),
        }
    }
}

fn encode_query(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}
