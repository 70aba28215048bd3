use std::fmt;

use reqwest::Url;

use crate::errors::Result;
use crate::model::{PlayableLink, Quality, SubtitleFile};

pub type SubtitleSink<'a> = &'a mut (dyn FnMut(SubtitleFile) + Send);
pub type LinkSink<'a> = &'a mut (dyn FnMut(PlayableLink) + Send);

/// Resolves a hosting provider page into playable links.
///
/// Implementations report what they find through the two sinks; finding
/// nothing is not an error.
pub trait Extractor {
    async fn extract(
        &self,
        url: &Url,
        referer: &Url,
        on_subtitle: SubtitleSink<'_>,
        on_link: LinkSink<'_>,
    ) -> Result<()>;
}

/// Identity of a watch server
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServerKind {
    /// The site's own server
    MyCima,
    GoVid,
    VidBom,
    VidShare,
    DoodStream,
    OkRu,
    UqLoad,
    Other,
}

impl ServerKind {
    const NAMES: [(&'static str, ServerKind); 6] = [
        ("govid", ServerKind::GoVid),
        ("vidbom", ServerKind::VidBom),
        ("vidshare", ServerKind::VidShare),
        ("dood", ServerKind::DoodStream),
        ("ok.ru", ServerKind::OkRu),
        ("uqload", ServerKind::UqLoad),
    ];

    /// Classifies a watch server entry from its own-server flag and its
    /// label.
    pub fn classify(own_server: bool, name: &str) -> Self {
        if own_server {
            return ServerKind::MyCima;
        }

        let name = name.to_lowercase();
        Self::NAMES
            .iter()
            .find(|(needle, _)| name.contains(needle))
            .map_or(ServerKind::Other, |(_, kind)| *kind)
    }

    /// Classifies a hosting url by its host name
    pub fn from_url(url: &Url) -> Self {
        Self::classify(false, url.host_str().unwrap_or_default())
    }

    /// Own-server `/run/` urls point straight at the media file
    pub fn is_direct(&self, url: &Url) -> bool {
        *self == ServerKind::MyCima && url.as_str().contains("/run/")
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServerKind::MyCima => "WeCima",
            ServerKind::GoVid => "GoVid",
            ServerKind::VidBom => "VidBom",
            ServerKind::VidShare => "VidShare",
            ServerKind::DoodStream => "DoodStream",
            ServerKind::OkRu => "Ok.ru",
            ServerKind::UqLoad => "UQLoad",
            ServerKind::Other => "Other",
        };

        f.write_str(s)
    }
}

/// Extractor that hands back the hosting page itself, labelled with its
/// provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughExtractor;

impl Extractor for PassthroughExtractor {
    async fn extract(
        &self,
        url: &Url,
        referer: &Url,
        _on_subtitle: SubtitleSink<'_>,
        on_link: LinkSink<'_>,
    ) -> Result<()> {
        let provider_label = match ServerKind::from_url(url) {
            ServerKind::Other => url.host_str().unwrap_or("Other").to_string(),
            kind => kind.to_string(),
        };

        on_link(PlayableLink {
            display_label: format!("{provider_label} Server"),
            provider_label,
            media_url: url.clone(),
            referer_url: referer.clone(),
            quality: Quality::Unknown,
            is_segmented: url.path().ends_with(".m3u8"),
        });

        Ok(())
    }
}
