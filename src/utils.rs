/// Path of `url` below `site_url` with any query or fragment cut off
fn site_path<'a>(url: &'a str, site_url: &str) -> Option<&'a str> {
    let rest = url.trim().strip_prefix(site_url)?;
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Username from a profile URL such as `https://example.test/alice`
pub fn extract_username(profile_url: &str, site_url: &str) -> Option<String> {
    site_path(profile_url, site_url)?
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// File name (without extension) from a presentation link: the path
/// segment following the owner segment
pub fn file_name_from_link(link: &str, site_url: &str) -> Option<String> {
    site_path(link, site_url)?
        .split('/')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
