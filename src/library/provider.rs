//! In-memory media library used by the demo binary and the benchmark.

use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::models::{DataItem, DataList, NodeRef};
use crate::traits::DataProvider;

struct Album {
    key: &'static str,
    title: &'static str,
    artist: &'static str,
    tracks: &'static [&'static str],
}

const ALBUMS: &[Album] = &[
    Album {
        key: "kind-of-blue",
        title: "Kind of Blue",
        artist: "Miles Davis",
        tracks: &["So What", "Freddie Freeloader", "Blue in Green", "All Blues", "Flamenco Sketches"],
    },
    Album {
        key: "blue-train",
        title: "Blue Train",
        artist: "John Coltrane",
        tracks: &["Blue Train", "Moment's Notice", "Locomotion", "I'm Old Fashioned", "Lazy Bird"],
    },
    Album {
        key: "mingus-ah-um",
        title: "Mingus Ah Um",
        artist: "Charles Mingus",
        tracks: &["Better Git It in Your Soul", "Goodbye Pork Pie Hat", "Boogie Stop Shuffle"],
    },
    Album {
        key: "time-out",
        title: "Time Out",
        artist: "Dave Brubeck",
        tracks: &["Blue Rondo a la Turk", "Strange Meadow Lark", "Take Five", "Three to Get Ready"],
    },
];

/// Serves a fixed set of albums. Loads complete immediately unless a
/// latency is configured, in which case they need a tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct StaticLibrary {
    latency: Option<Duration>,
}

impl StaticLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency: Some(latency) }
    }

    pub fn album_nodes(&self) -> Vec<NodeRef> {
        ALBUMS
            .iter()
            .map(|album| NodeRef::new("album", album.key).with_title(album.title))
            .collect()
    }

    fn lookup(node: &NodeRef, source: &str) -> Result<DataList, String> {
        let items: Vec<DataItem> = match (node.handler.as_str(), source) {
            ("albums", "items") | ("collection", "recentAlbums") => ALBUMS
                .iter()
                .map(|album| DataItem::new(album.key, album.title))
                .collect(),
            ("artists", "items") | ("collection", "topArtists") => {
                let mut artists: Vec<&str> = ALBUMS.iter().map(|album| album.artist).collect();
                artists.sort_unstable();
                artists.dedup();
                artists
                    .into_iter()
                    .map(|artist| DataItem::new(artist.to_lowercase().replace(' ', "-"), artist))
                    .collect()
            }
            ("album", "items") => {
                let album = ALBUMS
                    .iter()
                    .find(|album| album.key == node.key)
                    .ok_or_else(|| format!("no album '{}'", node.key))?;
                album
                    .tracks
                    .iter()
                    .enumerate()
                    .map(|(i, track)| DataItem::new(format!("{}-{}", album.key, i + 1), *track))
                    .collect()
            }
            ("nowPlaying", "items") => ALBUMS[0]
                .tracks
                .iter()
                .take(3)
                .map(|track| DataItem::new(track.to_lowercase(), *track))
                .collect(),
            _ => return Err(format!("unknown source '{}' for {}", source, node.path())),
        };
        Ok(DataList::new(items))
    }
}

impl DataProvider for StaticLibrary {
    fn fetch(&self, node: &NodeRef, source: &str) -> LocalBoxFuture<'static, Result<DataList, String>> {
        let result = Self::lookup(node, source);
        match self.latency {
            Some(latency) => async move {
                tokio::time::sleep(latency).await;
                result
            }
            .boxed_local(),
            None => futures::future::ready(result).boxed_local(),
        }
    }

    fn resolve_title(&self, node: &NodeRef) -> String {
        ALBUMS
            .iter()
            .find(|album| node.handler == "album" && album.key == node.key)
            .map(|album| album.title.to_string())
            .unwrap_or_else(|| node.handler.clone())
    }
}
