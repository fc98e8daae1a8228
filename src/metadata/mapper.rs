//! Applies sidecar fields onto an item.
//!
//! Each refresh fully supersedes earlier sidecar-derived data: provider ids
//! are replaced, name and overview are assigned even when absent, and tags
//! and genres are added idempotently.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use ytmeta_common::{Error, Result};

use super::extractor::ExtractorRegistry;
use super::item::{MediaItem, ProviderIds};
use super::sidecar::SidecarDescriptor;

/// Date format used by `release_date` / `upload_date`.
const SIDECAR_DATE_FORMAT: &str = "%Y%m%d";

/// Write the sidecar's fields onto `item`.
///
/// Steps run in a fixed order; a malformed `release_date`/`upload_date`
/// aborts at the date step, after provider ids, name and overview have
/// already been written. Callers that must not observe partial state should
/// apply onto a scratch item.
///
/// # Errors
///
/// [`Error::Parse`] when the chosen date string is not `YYYYMMDD`.
pub fn apply_sidecar<T: AsMut<MediaItem>>(
    target: &mut T,
    descriptor: &SidecarDescriptor,
    registry: &ExtractorRegistry,
) -> Result<()> {
    let item = target.as_mut();

    let canonical = registry.resolve(&descriptor.extractor_key);
    let external_id = registry.effective_id(&canonical, descriptor);
    item.provider_ids = ProviderIds::from([(canonical, external_id)]);

    item.name = descriptor.full_title.clone();
    item.overview = descriptor.description.clone();

    if let Some(date) = resolve_premiere_date(descriptor)? {
        item.production_year = Some(date.year());
        item.premiere_date = Some(date);
    }

    for tag in non_blank(descriptor.tags.as_deref()) {
        item.add_tag(tag);
    }
    for category in non_blank(descriptor.categories.as_deref()) {
        item.add_genre(category);
    }

    Ok(())
}

/// Pick the premiere date from the sidecar.
///
/// `release_date`, then `upload_date` (as midnight UTC); failing both, a
/// positive `timestamp` in Unix seconds. `Ok(None)` when no source applies.
///
/// # Errors
///
/// [`Error::Parse`] when a date string is present but malformed. There is no
/// fallback to the timestamp in that case.
pub fn resolve_premiere_date(descriptor: &SidecarDescriptor) -> Result<Option<DateTime<Utc>>> {
    if let Some(raw) = descriptor
        .release_date
        .as_deref()
        .or(descriptor.upload_date.as_deref())
    {
        return parse_sidecar_date(raw).map(Some);
    }

    match descriptor.timestamp {
        Some(secs) if secs > 0 => DateTime::from_timestamp(secs, 0)
            .map(Some)
            .ok_or_else(|| Error::parse(format!("timestamp out of range: {}", secs))),
        _ => Ok(None),
    }
}

/// Parse an exact `YYYYMMDD` string as midnight UTC.
///
/// chrono tolerates leading whitespace and single-digit fields, so the shape
/// is checked first.
fn parse_sidecar_date(raw: &str) -> Result<DateTime<Utc>> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::parse(format!(
            "invalid sidecar date {:?}: expected YYYYMMDD",
            raw
        )));
    }
    let date = NaiveDate::parse_from_str(raw, SIDECAR_DATE_FORMAT)
        .map_err(|e| Error::parse(format!("invalid sidecar date {:?}: {}", raw, e)))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Trimmed, non-empty entries of an optional list.
fn non_blank(values: Option<&[String]>) -> impl Iterator<Item = &str> {
    values
        .unwrap_or_default()
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;
    use ytmeta_common::ItemKind;

    fn item() -> MediaItem {
        MediaItem::new("/videos/clip.mkv", ItemKind::Movie)
    }

    fn descriptor() -> SidecarDescriptor {
        SidecarDescriptor {
            id: "abc123".into(),
            extractor_key: "Youtube".into(),
            full_title: Some("A Clip".into()),
            description: Some("About the clip".into()),
            ..Default::default()
        }
    }

    #[test]
    fn replaces_provider_ids() {
        let mut item = item();
        item.provider_ids.insert("Tmdb".into(), "42".into());

        apply_sidecar(&mut item, &descriptor(), ExtractorRegistry::builtin()).unwrap();

        assert_eq!(
            item.provider_ids,
            ProviderIds::from([("Youtube".to_string(), "abc123".to_string())])
        );
    }

    #[test]
    fn nrk_provider_id_comes_from_playlist_id() {
        let mut item = item();
        let d = SidecarDescriptor {
            id: "X".into(),
            extractor_key: "NRKTV".into(),
            playlist_id: Some("Y".into()),
            ..Default::default()
        };

        apply_sidecar(&mut item, &d, ExtractorRegistry::builtin()).unwrap();

        assert_eq!(item.provider_ids.len(), 1);
        assert_eq!(item.provider_ids.get("NRK").map(String::as_str), Some("Y"));
    }

    #[test]
    fn name_and_overview_are_assigned_unconditionally() {
        let mut item = item();
        item.name = Some("Old".into());
        item.overview = Some("Old overview".into());

        let d = SidecarDescriptor {
            id: "x".into(),
            ..Default::default()
        };
        apply_sidecar(&mut item, &d, ExtractorRegistry::builtin()).unwrap();

        assert!(item.name.is_none());
        assert!(item.overview.is_none());
    }

    #[test]
    fn release_date_beats_timestamp() {
        let d = SidecarDescriptor {
            release_date: Some("20200101".into()),
            upload_date: Some("20190505".into()),
            timestamp: Some(1_000_000_000),
            ..Default::default()
        };
        let mut item = item();
        apply_sidecar(&mut item, &d, ExtractorRegistry::builtin()).unwrap();

        assert_eq!(item.production_year, Some(2020));
        assert_eq!(
            item.premiere_date,
            Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn upload_date_used_without_release_date() {
        let d = SidecarDescriptor {
            upload_date: Some("20190505".into()),
            timestamp: Some(1_000_000_000),
            ..Default::default()
        };
        let date = resolve_premiere_date(&d).unwrap().unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2019, 5, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn timestamp_used_as_last_resort() {
        let d = SidecarDescriptor {
            timestamp: Some(1_000_000_000),
            ..Default::default()
        };
        let date = resolve_premiere_date(&d).unwrap().unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap());
    }

    #[test]
    fn zero_timestamp_leaves_dates_untouched() {
        let mut item = item();
        let previous = Utc.with_ymd_and_hms(1999, 12, 31, 0, 0, 0).unwrap();
        item.production_year = Some(1999);
        item.premiere_date = Some(previous);

        let d = SidecarDescriptor {
            timestamp: Some(0),
            ..Default::default()
        };
        apply_sidecar(&mut item, &d, ExtractorRegistry::builtin()).unwrap();

        assert_eq!(item.production_year, Some(1999));
        assert_eq!(item.premiere_date, Some(previous));
    }

    #[test]
    fn malformed_date_is_parse_error_without_fallback() {
        let d = SidecarDescriptor {
            id: "x".into(),
            full_title: Some("Title".into()),
            release_date: Some("2020-01-01".into()),
            timestamp: Some(1_000_000_000),
            ..Default::default()
        };
        let mut item = item();
        let err = apply_sidecar(&mut item, &d, ExtractorRegistry::builtin()).unwrap_err();

        assert_matches!(err, Error::Parse(_));
        assert!(item.premiere_date.is_none());
        // Steps before the date step have already run.
        assert_eq!(item.name.as_deref(), Some("Title"));
    }

    #[test]
    fn date_must_be_exactly_eight_digits() {
        for raw in ["2020011", " 20200101", "2020 0101", "202001 1", "202001011", "20201301"] {
            let d = SidecarDescriptor {
                release_date: Some(raw.into()),
                ..Default::default()
            };
            assert_matches!(resolve_premiere_date(&d), Err(Error::Parse(_)), "{raw:?}");
        }

        let d = SidecarDescriptor {
            upload_date: Some("2020011".into()),
            timestamp: Some(1_000_000_000),
            ..Default::default()
        };
        assert_matches!(resolve_premiere_date(&d), Err(Error::Parse(_)));
    }

    #[test]
    fn tags_trimmed_and_deduplicated() {
        let d = SidecarDescriptor {
            tags: Some(vec![" a ".into(), "a".into(), "b".into(), "   ".into()]),
            categories: Some(vec!["Music".into(), " Music".into(), "".into()]),
            ..Default::default()
        };
        let mut item = item();
        apply_sidecar(&mut item, &d, ExtractorRegistry::builtin()).unwrap();

        assert_eq!(item.tags, vec!["a", "b"]);
        assert_eq!(item.genres, vec!["Music"]);
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let d = SidecarDescriptor {
            id: "abc".into(),
            extractor_key: "Youtube".into(),
            full_title: Some("T".into()),
            upload_date: Some("20210310".into()),
            tags: Some(vec!["x".into(), "y".into()]),
            categories: Some(vec!["Education".into()]),
            ..Default::default()
        };
        let mut item = item();
        apply_sidecar(&mut item, &d, ExtractorRegistry::builtin()).unwrap();
        let first = item.clone();
        apply_sidecar(&mut item, &d, ExtractorRegistry::builtin()).unwrap();

        assert_eq!(item, first);
    }
}
