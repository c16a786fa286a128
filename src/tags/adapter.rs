use std::error::Error;
use std::path::Path;

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::tag::{ItemKey, Tag, TagExt};

use crate::grid::TrackRecord;

fn first_text(tag: &Tag, key: &ItemKey) -> String {
    tag.get_string(key).unwrap_or_default().to_string()
}

/// Read one file's metadata into a fresh `TrackRecord`.
///
/// Absent tags yield empty fields and an absent cover is a valid snapshot;
/// only an unreadable or unrecognized file is an error.
pub fn load_snapshot(path: &Path) -> Result<TrackRecord, Box<dyn Error>> {
    let tagged = lofty::read_from_path(path)?;
    let mut record = TrackRecord::new(path.to_path_buf());

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        record.title = first_text(tag, &ItemKey::TrackTitle);
        record.artist = first_text(tag, &ItemKey::TrackArtist);
        record.album = first_text(tag, &ItemKey::AlbumTitle);
        record.track_number = first_text(tag, &ItemKey::TrackNumber);
        record.genre = first_text(tag, &ItemKey::Genre);

        // ID3 "date" frames land under RecordingDate; prefer the plain year.
        record.year = first_text(tag, &ItemKey::Year);
        if record.year.is_empty() {
            record.year = first_text(tag, &ItemKey::RecordingDate);
        }

        if let Some(picture) = tag.pictures().first() {
            record.cover_data = Some(picture.data().to_vec());
            if let Some(mime) = picture.mime_type() {
                record.cover_mime = mime.as_str().to_string();
            }
        }
    }

    Ok(record)
}

fn set_text(tag: &mut Tag, key: ItemKey, value: &str) {
    if value.is_empty() {
        tag.remove_key(&key);
    } else {
        tag.insert_text(key, value.to_string());
    }
}

/// Write a record's fields back into its file.
///
/// Empty text fields remove the corresponding tag item; the front cover is
/// replaced or stripped to match `cover_data`.
pub fn persist(record: &TrackRecord) -> Result<(), Box<dyn Error>> {
    let tagged = lofty::read_from_path(&record.path)?;
    let mut tag = match tagged.primary_tag() {
        Some(existing) => existing.clone(),
        None => Tag::new(tagged.primary_tag_type()),
    };

    set_text(&mut tag, ItemKey::TrackTitle, &record.title);
    set_text(&mut tag, ItemKey::TrackArtist, &record.artist);
    set_text(&mut tag, ItemKey::AlbumTitle, &record.album);
    set_text(&mut tag, ItemKey::TrackNumber, &record.track_number);
    set_text(&mut tag, ItemKey::Year, &record.year);
    set_text(&mut tag, ItemKey::Genre, &record.genre);

    tag.remove_picture_type(PictureType::CoverFront);
    if let Some(data) = &record.cover_data {
        let mime = match record.cover_mime.as_str() {
            "image/png" => MimeType::Png,
            _ => MimeType::Jpeg,
        };
        tag.push_picture(Picture::new_unchecked(
            PictureType::CoverFront,
            Some(mime),
            None,
            data.clone(),
        ));
    }

    tag.save_to_path(&record.path, WriteOptions::default())?;
    Ok(())
}
