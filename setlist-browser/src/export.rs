//! Favorites exports and the contact page hand-off.
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use setlist_core::song::Song;
use tracing::warn;
use url::{ParseError, Position, Url};

pub const CSV_HEADER: &str = "Title,Artist,Genres,Moments,Era,Tempo";
pub const CSV_FILENAME: &str = "setlist-favorites.csv";
pub const CSV_MIME: &str = "text/csv";

/// Query parameter carrying favorited ids to the contact page.
pub const SETLIST_PARAM: &str = "setlist";

/// Resolves site-relative contact pages; never appears in output.
const RELATIVE_BASE: &str = "http://localhost/";

/// Characters `encodeURIComponent` leaves alone, so links built here match
/// the ones the site has always produced.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A CSV payload ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: &'static str,
    pub mime: &'static str,
    pub body: String,
}

/// Encoded parameter plus the full contact page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryLink {
    pub param: String,
    pub url: String,
}

/// One `"{title} - {artist}"` line per song.
pub fn songs_as_text<'a, I>(songs: I) -> String
where
    I: IntoIterator<Item = &'a Song>,
{
    songs
        .into_iter()
        .map(Song::display_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every field is wrapped in double quotes as-is; embedded quotes are not
/// escaped, matching the spreadsheets already built from this export.
pub fn csv_row(song: &Song) -> String {
    format!(
        "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
        song.title,
        song.artist,
        song.genres.join("; "),
        song.moments.join("; "),
        song.era.map(|e| e.as_str()).unwrap_or(""),
        song.tempo.map(|t| t.as_str()).unwrap_or(""),
    )
}

pub fn songs_as_csv<'a, I>(songs: I) -> String
where
    I: IntoIterator<Item = &'a Song>,
{
    let mut lines = vec![CSV_HEADER.to_owned()];
    lines.extend(songs.into_iter().map(csv_row));
    lines.join("\n")
}

pub fn csv_export<'a, I>(songs: I) -> CsvExport
where
    I: IntoIterator<Item = &'a Song>,
{
    CsvExport {
        filename: CSV_FILENAME,
        mime: CSV_MIME,
        body: songs_as_csv(songs),
    }
}

/// Comma-joined ids, percent-encoded as a URI component.
pub fn encode_setlist_param<S: AsRef<str>>(ids: &[S]) -> String {
    let joined = ids.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(",");
    utf8_percent_encode(&joined, URI_COMPONENT).to_string()
}

/// Parse a contact page that may be absolute or site-relative. The flag is
/// true for relative pages.
pub(crate) fn parse_page(page: &str) -> Result<(Url, bool), ParseError> {
    match Url::parse(page) {
        Ok(url) => Ok((url, false)),
        Err(ParseError::RelativeUrlWithoutBase) => Ok((Url::parse(RELATIVE_BASE)?.join(page)?, true)),
        Err(e) => Err(e),
    }
}

fn append_query_pair(page: &str, pair: &str) -> Result<String, ParseError> {
    let (mut url, relative) = parse_page(page)?;
    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{pair}"),
        _ => pair.to_owned(),
    };
    url.set_query(Some(&query));

    if relative {
        Ok(url[Position::BeforePath..].to_owned())
    } else {
        Ok(url.into())
    }
}

/// The `setlist` pair is appended to any query the page already has, ahead
/// of a fragment.
pub fn inquiry_link<S: AsRef<str>>(contact_page: &str, ids: &[S]) -> InquiryLink {
    let param = encode_setlist_param(ids);
    let pair = format!("{SETLIST_PARAM}={param}");
    let url = append_query_pair(contact_page, &pair).unwrap_or_else(|e| {
        warn!("Cannot parse contact page {:?}: {}", contact_page, e);
        format!("{contact_page}?{pair}")
    });
    InquiryLink { param, url }
}
