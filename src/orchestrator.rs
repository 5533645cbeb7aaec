//! Interactive driver: prompt for a profile, crawl it, convert every deck.

use crate::config::DownloaderConfig;
use crate::converter::{ConversionApi, Converter};
use crate::crawlers::{ListingPage, PageLauncher, collect_links};
use crate::error::{Error, Result};
use crate::prompt::Prompt;
use crate::results::{LinkSet, RunSummary};
use crate::utils::{extract_username, file_name_from_link};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;

const QUESTION: &str = "Enter the URL to scrape: ";

/// Profile the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub url: String,
    pub username: String,
}

/// Reads the profile URL and derives the username from it
pub fn read_profile<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    config: &DownloaderConfig,
) -> Result<Profile> {
    let url = prompt
        .ask(QUESTION)?
        .filter(|url| !url.is_empty())
        .ok_or(Error::EmptyInput)?;
    Url::parse(&url)?;

    let username =
        extract_username(&url, &config.site_url).ok_or_else(|| Error::InvalidProfileUrl {
            url: url.clone(),
            site: config.site_url.clone(),
        })?;

    Ok(Profile { url, username })
}

async fn ensure_dir(dir: &Path) -> Result<()> {
    if fs::try_exists(dir).await? {
        ::log::info!("Folder already exists: {}", dir.display());
    } else {
        fs::create_dir_all(dir).await?;
        ::log::info!("Folder created: {}", dir.display());
    }
    Ok(())
}

/// Full run: prompt, crawl, then convert each collected link in turn.
///
/// The browser is launched only once the profile URL is valid and is
/// closed whether or not the crawl succeeds. The prompt is dropped on
/// return.
pub async fn run<R, W, L, A>(
    mut prompt: Prompt<R, W>,
    launcher: &L,
    converter: &Converter<A>,
    config: &DownloaderConfig,
) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
    L: PageLauncher,
    A: ConversionApi,
{
    let profile = read_profile(&mut prompt, config)?;
    let user_dir = user_dir(config, &profile.username);
    ensure_dir(&user_dir).await?;

    let mut page = launcher.launch().await?;
    let result = download_all(&mut page, &profile, &user_dir, converter, config).await;
    close_page(page).await;

    result
}

/// Link-list flow: prompt, crawl, and write the links newline-joined to
/// `links_file` without converting anything
pub async fn run_links_only<R, W, L>(
    mut prompt: Prompt<R, W>,
    launcher: &L,
    config: &DownloaderConfig,
    links_file: &Path,
) -> Result<LinkSet>
where
    R: BufRead,
    W: Write,
    L: PageLauncher,
{
    let profile = read_profile(&mut prompt, config)?;

    let mut page = launcher.launch().await?;
    let result = collect_links(&mut page, &profile.url, config).await;
    close_page(page).await;

    let links = result?;
    fs::write(links_file, links.to_text()).await?;
    ::log::info!(
        "Wrote {} links for user {} to {}",
        links.len(),
        profile.username,
        links_file.display()
    );

    Ok(links)
}

async fn close_page<P: ListingPage>(page: P) {
    if let Err(e) = page.close().await {
        ::log::warn!("Failed to close the browser session: {}", e);
    }
}

async fn download_all<P, A>(
    page: &mut P,
    profile: &Profile,
    user_dir: &Path,
    converter: &Converter<A>,
    config: &DownloaderConfig,
) -> Result<RunSummary>
where
    P: ListingPage,
    A: ConversionApi,
{
    let links = collect_links(page, &profile.url, config).await?;
    let total = links.len();
    ::log::info!(
        "Total {} files to download for user: {}",
        total,
        profile.username
    );

    let mut summary = RunSummary {
        username: profile.username.clone(),
        links_found: total,
        ..RunSummary::default()
    };

    for link in &links {
        let Some(file_name) = file_name_from_link(link, &config.site_url) else {
            ::log::warn!("Could not extract file name from link: {}", link);
            summary.skipped += 1;
            continue;
        };

        let outcome = converter
            .convert(link, &format!("{file_name}.pdf"), user_dir)
            .await;
        summary.attempted += 1;
        if outcome.is_saved() {
            summary.saved += 1;
        }
        ::log::info!("Processed {} of {} files.", summary.attempted, total);
    }

    ::log::info!(
        "All downloads completed: {} saved, {} failed or empty, {} skipped",
        summary.saved,
        summary.attempted - summary.saved,
        summary.skipped
    );
    Ok(summary)
}

/// `<output_dir>/<username>` for a profile
pub fn user_dir(config: &DownloaderConfig, username: &str) -> PathBuf {
    config.output_dir.join(username)
}
