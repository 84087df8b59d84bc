use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use setlist_browser::inquiry::submit_inquiry;
use setlist_browser::{Browser, FileStore, InquiryForm, LogSender};
use setlist_catalog::Catalog;
use setlist_core::config::Config;
use setlist_core::error::SetlistError;
use setlist_core::filter::{SortMode, ViewMode};
use setlist_core::section::Section;
use tracing::info;

/// Contact form fields accepted by `setlist inquiry`.
#[derive(clap::Args, Debug, Default)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long = "event-date", default_value = "")]
    pub event_date: String,
    #[arg(long = "event-type", default_value = "")]
    pub event_type: String,
    #[arg(long, default_value = "")]
    pub guests: String,
    #[arg(long, default_value = "")]
    pub venue: String,
    #[arg(long, default_value = "")]
    pub location: String,
    /// Free-form notes about the event
    #[arg(long, default_value = "")]
    pub preferences: String,
}

fn mount(config: &Config, catalog: &Catalog) -> Browser<FileStore> {
    let store = FileStore::new(config.general.preferences_file.clone());
    Browser::mount(catalog.songs(), store).with_contact_page(config.contact.page_url.clone())
}

/// Favorite each id, failing on the first one the catalog does not know.
fn add_favorites(browser: &mut Browser<FileStore>, catalog: &Catalog, ids: &[String]) -> Result<()> {
    for id in ids.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
        catalog.require(id)?;
        if !browser.is_favorite(id) {
            browser.toggle_favorite(id);
        }
    }
    Ok(())
}

pub fn list(
    config: &Config,
    search: Option<String>,
    sort: Option<SortMode>,
    view: Option<ViewMode>,
) -> Result<()> {
    let catalog = Catalog::embedded();
    let mut browser = mount(config, &catalog);

    if let Some(view) = view {
        browser.set_view_mode(view);
    }
    if let Some(sort) = sort {
        browser.set_sort(sort);
    }
    if let Some(search) = search {
        browser.set_search(search);
    }

    match browser.view_mode() {
        ViewMode::List => {
            for group in browser.grouped_songs() {
                let expanded = browser.is_section_expanded(group.section);
                let marker = if expanded { '-' } else { '+' };
                println!("{} {} ({})", marker, group.section, group.songs.len());
                if expanded {
                    for song in &group.songs {
                        println!("    {}", song.display_line());
                    }
                }
            }
        }
        ViewMode::Grid => {
            for song in browser.flat_sorted_songs() {
                println!("{:<40} {}", song.title, song.artist);
            }
        }
    }

    info!("{} of {} songs shown", browser.result_count(), catalog.len());
    Ok(())
}

pub fn sections(config: &Config, toggle: &[String], expand_all: bool, collapse_all: bool) -> Result<()> {
    let catalog = Catalog::embedded();
    let mut browser = mount(config, &catalog);

    if expand_all {
        browser.expand_all();
    }
    if collapse_all {
        browser.collapse_all();
    }
    for name in toggle {
        let section = Section::from_name(name)
            .ok_or_else(|| SetlistError::NotFound(format!("No section named {name:?}")))?;
        browser.toggle_section(section);
    }

    for section in Section::ALL {
        let state = if browser.is_section_expanded(section) {
            "expanded"
        } else {
            "collapsed"
        };
        println!("{:<24} {}", section.name(), state);
    }
    Ok(())
}

pub async fn export(config: &Config, ids: &[String], csv: bool, output: Option<Utf8PathBuf>) -> Result<()> {
    let catalog = Catalog::embedded();
    let mut browser = mount(config, &catalog);
    add_favorites(&mut browser, &catalog, ids)?;

    let body = if csv {
        browser.export_favorites_csv_file().body
    } else {
        browser.export_favorites_as_text()
    };

    match output {
        Some(path) => {
            tokio::fs::write(&path, body)
                .await
                .with_context(|| format!("Failed to write {path}"))?;
            info!("Exported {} songs to {}", browser.favorite_ids().len(), path);
        }
        None => println!("{body}"),
    }
    Ok(())
}

pub async fn inquiry(config: &Config, ids: &[String], form: FormArgs, send: bool) -> Result<()> {
    let catalog = Catalog::embedded();
    let mut browser = mount(config, &catalog);
    add_favorites(&mut browser, &catalog, ids)?;

    let link = browser.start_inquiry();
    println!("{}", link.url);

    if !send {
        return Ok(());
    }

    let form = InquiryForm {
        name: form.name,
        email: form.email,
        phone: form.phone,
        event_date: form.event_date,
        event_type: form.event_type,
        guests: form.guests,
        venue: form.venue,
        location: form.location,
        preferences: form.preferences,
        setlist: link.param,
    };

    let outcome = submit_inquiry(&LogSender, &form, &catalog, &config.contact).await;
    println!("{}", outcome.message);
    if !outcome.success {
        bail!("Inquiry was not submitted");
    }
    Ok(())
}
