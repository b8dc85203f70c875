use url::Url;

const PROXY_HOST: &str = "https://images.weserv.nl";
const SITE_BASE: &str = "https://www.mob.co.uk";

/// Route a recipe image URL through the `images.weserv.nl` resizing proxy.
///
/// - CDN cropping segments (`/_640x360_crop_.../`) are stripped so the proxy
///   works from the full-size original.
/// - `mob-cdn.co.uk` URLs, protocol-relative (`//...`) URLs and site-relative
///   (`/...`) paths are wrapped in a proxy URL.
/// - URLs already on the proxy get fixed resize parameters (`w=640`, `h=640`,
///   `fit=cover`, `q=75`, `output=webp`), overriding any existing ones.
/// - Anything else passes through unchanged.
pub fn normalize_image_url(raw: &str) -> String {
    let stripped = strip_crop_segments(raw.trim());
    if stripped.is_empty() {
        return String::new();
    }

    if stripped.starts_with(PROXY_HOST) {
        return force_resize_params(&stripped);
    }
    if stripped.contains("mob-cdn.co.uk") {
        return format!("{PROXY_HOST}/?url={stripped}");
    }
    if let Some(rest) = stripped.strip_prefix("//") {
        return format!("{PROXY_HOST}/?url=https://{rest}");
    }
    if stripped.starts_with('/') {
        return format!("{PROXY_HOST}/?url={SITE_BASE}{stripped}");
    }
    stripped
}

/// Drop CDN resize/crop path segments shaped like `_1200x630_crop_center-center_82_none`.
fn strip_crop_segments(url: &str) -> String {
    url.split('/')
        .filter(|segment| !is_crop_segment(segment))
        .collect::<Vec<_>>()
        .join("/")
}

fn is_crop_segment(segment: &str) -> bool {
    let Some(rest) = segment.strip_prefix('_') else {
        return false;
    };
    let Some((dims, tail)) = rest.split_once("_crop_") else {
        return false;
    };
    let Some((w, h)) = dims.split_once('x') else {
        return false;
    };
    !tail.is_empty()
        && !w.is_empty()
        && !h.is_empty()
        && w.bytes().all(|b| b.is_ascii_digit())
        && h.bytes().all(|b| b.is_ascii_digit())
}

fn force_resize_params(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };

    const FORCED: [&str; 5] = ["w", "h", "fit", "q", "output"];
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !FORCED.contains(&key.as_ref()) && key != "af" && key != "il")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs
            .append_pair("w", "640")
            .append_pair("h", "640")
            .append_pair("fit", "cover")
            .append_pair("q", "75")
            .append_pair("output", "webp");
        // Auto-format and interlacing are flag parameters without values.
        pairs.append_key_only("af").append_key_only("il");
    }

    url.to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/imagery/proxy.rs"]
mod tests;
