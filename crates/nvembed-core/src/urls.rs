//! URL normalization and viewer-URL derivation.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;
use url::form_urlencoded;

use crate::Provider;

/// Check whether a string is accepted as an embed source URL: either a
/// site-relative path (leading `/`) or an http(s) URL.
pub fn is_url(url: &str) -> bool {
    static URL_PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(https?://[^\s]+)").unwrap());

    if url.starts_with('/') {
        return true;
    }
    URL_PATTERN.is_match(url)
}

/// Derive the provider's embeddable viewer URL from an original
/// document URL. One-way; inverted on import by
/// [`recover_original_url`].
pub fn derive_embed_url(original_url: &str, provider: Provider) -> String {
    let encoded: String = form_urlencoded::byte_serialize(original_url.as_bytes()).collect();
    match provider {
        Provider::Google => {
            format!("https://docs.google.com/viewer?url={encoded}&embedded=true")
        }
        Provider::Microsoft => {
            format!("https://view.officeapps.live.com/op/embed.aspx?src={encoded}")
        }
    }
}

/// Recover the original document URL from a viewer-proxy URL by
/// reading the `url` query parameter, falling back to `src`. Returns
/// an empty string when the input is unparsable or carries neither.
pub fn recover_original_url(viewer_url: &str) -> String {
    let Ok(parsed) = Url::parse(viewer_url) else {
        return String::new();
    };

    for key in ["url", "src"] {
        if let Some((_, value)) = parsed.query_pairs().find(|(k, _)| k == key) {
            return value.into_owned();
        }
    }

    String::new()
}

/// Infer the provider from a viewer URL's host.
pub fn infer_provider(viewer_url: &str) -> Provider {
    match Url::parse(viewer_url) {
        Ok(parsed) if parsed.host_str() == Some("docs.google.com") => Provider::Google,
        _ => Provider::Microsoft,
    }
}

/// One public-video provider the insert path knows how to rewrite.
struct MediaProvider {
    patterns: &'static LazyLock<Vec<Regex>>,
    /// Substring of the matched text marking an already-embed form.
    embed_marker: Option<&'static str>,
    to_embed: fn(id: &str, url: &str) -> String,
}

static YOUTUBE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})",
        r"youtu\.be/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/embed/([a-zA-Z0-9_-]{11})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static VIMEO: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"player\.vimeo\.com/video/(\d+)", r"vimeo\.com/(\d+)"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

static FACEBOOK: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"facebook\.com/.+/videos/(\d+)",
        r"fb\.watch/([a-zA-Z0-9_-]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static TIKTOK: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"tiktok\.com/@[\w.-]+/video/(\d+)",
        r"tiktok\.com/embed/(\d+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DAILYMOTION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"dailymotion\.com/video/([a-zA-Z0-9]+)",
        r"dailymotion\.com/embed/video/([a-zA-Z0-9]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Rewrite a known public video URL into its embeddable form.
///
/// Provider patterns are tried in a fixed order; the first match wins.
/// Already-embed forms are returned unchanged, and so is anything no
/// pattern recognizes. Heuristic by design: the captured ID is trusted,
/// not validated.
pub fn normalize_media_url(url: &str) -> String {
    let providers = [
        MediaProvider {
            patterns: &YOUTUBE,
            embed_marker: Some("embed"),
            to_embed: |id, _| format!("https://www.youtube.com/embed/{id}"),
        },
        MediaProvider {
            patterns: &VIMEO,
            embed_marker: Some("player.vimeo"),
            to_embed: |id, _| format!("https://player.vimeo.com/video/{id}"),
        },
        // Facebook embeds always route through the video-plugin proxy
        // with the full original URL, for both videos/ and fb.watch.
        MediaProvider {
            patterns: &FACEBOOK,
            embed_marker: None,
            to_embed: |_, url| {
                let encoded: String = form_urlencoded::byte_serialize(url.as_bytes()).collect();
                format!("https://www.facebook.com/plugins/video.php?href={encoded}")
            },
        },
        MediaProvider {
            patterns: &TIKTOK,
            embed_marker: Some("embed"),
            to_embed: |id, _| format!("https://www.tiktok.com/embed/{id}"),
        },
        MediaProvider {
            patterns: &DAILYMOTION,
            embed_marker: Some("embed"),
            to_embed: |id, _| format!("https://www.dailymotion.com/embed/video/{id}"),
        },
    ];

    for provider in &providers {
        for pattern in provider.patterns.iter() {
            let Some(captures) = pattern.captures(url) else {
                continue;
            };
            let Some(id) = captures.get(1) else {
                continue;
            };
            let matched = captures.get(0).map(|m| m.as_str()).unwrap_or_default();
            if let Some(marker) = provider.embed_marker
                && matched.contains(marker)
            {
                return url.to_string();
            }
            return (provider.to_embed)(id.as_str(), url);
        }
    }

    url.to_string()
}

/// Strip the site origin prefix from an absolute URL.
pub fn to_relative_url(absolute_url: &str, origin: &str) -> String {
    match absolute_url.strip_prefix(origin) {
        Some(rest) => rest.to_string(),
        None => absolute_url.to_string(),
    }
}

/// Prefix a site-relative URL with the site origin. Absolute and
/// protocol-relative URLs pass through unchanged.
pub fn to_absolute_url(relative_url: &str, origin: &str) -> String {
    if relative_url.starts_with("http") || relative_url.starts_with("//") {
        return relative_url.to_string();
    }
    if relative_url.starts_with('/') {
        format!("{origin}{relative_url}")
    } else {
        format!("{origin}/{relative_url}")
    }
}
