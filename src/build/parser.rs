//! Aseprite export to [`AtlasMeta`] parsing and validation.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::cel_id::CelIdFactory;
use super::error::AtlasError;
use super::period::{compute_period, normalize};
use crate::schema::aseprite::{ASEPRITE_INFINITE, frame_key};
use crate::schema::{
    AsepriteFile, AsepriteFrame, AsepriteFrameTag, AsepriteSlice, AtlasMeta, Cel, Film, Millis,
    Playback, Rect, Wh,
};

/// Parse and validate an Aseprite JSON export.
///
/// See [`parse_atlas`].
pub fn parse_atlas_json(
    json: &str,
    ids: Option<&BTreeSet<String>>,
) -> Result<AtlasMeta, AtlasError> {
    let file: AsepriteFile = serde_json::from_str(json)?;
    parse_atlas(&file, ids)
}

/// Build an [`AtlasMeta`] from an Aseprite export.
///
/// When `ids` is given, the atlas must contain exactly those films. Otherwise
/// any tag set is accepted. Nothing is returned unless every film validates.
pub fn parse_atlas(
    file: &AsepriteFile,
    ids: Option<&BTreeSet<String>>,
) -> Result<AtlasMeta, AtlasError> {
    let mut factory = CelIdFactory::new();
    let film_by_id = parse_film_by_id(&mut factory, file, ids)?;
    let cel_bounds_by_id = cel_bounds_by_id(&factory, &film_by_id);

    log::info!(
        "parsed atlas {} ({} films, {} cels)",
        file.meta.image,
        film_by_id.len(),
        cel_bounds_by_id.len()
    );

    Ok(AtlasMeta {
        version: file.meta.version.clone(),
        filename: file.meta.image.clone(),
        format: file.meta.format.clone(),
        wh: file.meta.size,
        film_by_id,
        cel_bounds_by_id,
    })
}

fn parse_film_by_id(
    factory: &mut CelIdFactory,
    file: &AsepriteFile,
    ids: Option<&BTreeSet<String>>,
) -> Result<BTreeMap<String, Film>, AtlasError> {
    let slices = &file.meta.slices;
    let mut film_by_id = BTreeMap::new();

    for frame_tag in &file.meta.frame_tags {
        let id = &frame_tag.name;
        if ids.is_some_and(|ids| !ids.contains(id)) {
            return Err(AtlasError::UnknownId { id: id.clone() });
        }
        if film_by_id.contains_key(id) {
            return Err(AtlasError::DuplicateTag { tag: id.clone() });
        }
        let film = parse_film(frame_tag, file, slices, factory)?;
        film_by_id.insert(id.clone(), film);
    }

    if let Some(ids) = ids {
        let missing: Vec<String> = ids
            .iter()
            .filter(|id| !film_by_id.contains_key(*id))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(AtlasError::MissingIds { ids: missing });
        }
    }

    // Several slices may share a tag but every slice needs one.
    let orphans: Vec<String> = slices
        .iter()
        .filter(|slice| !film_by_id.contains_key(&slice.name))
        .map(|slice| slice.name.clone())
        .collect();
    if !orphans.is_empty() {
        return Err(AtlasError::OrphanSlices { names: orphans });
    }

    Ok(film_by_id)
}

fn cel_bounds_by_id(factory: &CelIdFactory, film_by_id: &BTreeMap<String, Film>) -> Vec<Rect> {
    let mut bounds = vec![Rect::EMPTY; factory.len()];
    for cel in film_by_id.values().flat_map(|film| film.cels.iter()) {
        bounds[cel.id.index()] = cel.bounds;
    }
    bounds
}

fn parse_film(
    frame_tag: &AsepriteFrameTag,
    file: &AsepriteFile,
    slices: &[AsepriteSlice],
    factory: &mut CelIdFactory,
) -> Result<Film, AtlasError> {
    let tag = &frame_tag.name;
    let direction = parse_playback(frame_tag)?;
    let loops = parse_loops(frame_tag)?;

    let frames = parse_frames(frame_tag, file)?;
    let Some((_, first)) = frames.first() else {
        return Err(AtlasError::EmptyFilm { tag: tag.clone() });
    };
    let wh = first.source_size;

    let mut cels = Vec::with_capacity(frames.len());
    for ((key, frame), index) in frames.iter().zip(0u32..) {
        let cel = parse_cel(tag, key, frame, index, slices, factory)?;
        cels.push(Arc::new(cel));
    }

    validate_area(tag, wh, &cels)?;
    validate_infinite(tag, direction, &cels)?;

    let duration = film_duration(tag, direction, &cels)?;
    if duration == Millis::ZERO {
        return Err(AtlasError::ZeroTotalDuration {
            tag: tag.clone(),
            duration,
        });
    }

    let period = compute_period(&cels);
    let cels = normalize(&cels, period);
    let slice_bounds = cels
        .iter()
        .fold(Rect::EMPTY, |union, cel| union.union(&cel.slice_bounds));

    log::debug!(
        "film {tag}: {} cels, {} entries, period {period}, duration {duration}, {direction}",
        frames.len(),
        cels.len()
    );

    Ok(Film {
        id: tag.clone(),
        wh,
        cels,
        slice_bounds,
        period,
        duration,
        direction,
        loops,
    })
}

/// Resolve `from..=to` to frames keyed by `"{tag}--{n}"`.
fn parse_frames<'a>(
    frame_tag: &AsepriteFrameTag,
    file: &'a AsepriteFile,
) -> Result<Vec<(String, &'a AsepriteFrame)>, AtlasError> {
    (frame_tag.from..=frame_tag.to)
        .map(|number| {
            let key = frame_key(&frame_tag.name, number);
            match file.frame(&frame_tag.name, number) {
                Some(frame) => Ok((key, frame)),
                None => Err(AtlasError::MissingFrame { key }),
            }
        })
        .collect()
}

fn parse_playback(frame_tag: &AsepriteFrameTag) -> Result<Playback, AtlasError> {
    Playback::from_aseprite(&frame_tag.direction).ok_or_else(|| AtlasError::UnknownDirection {
        tag: frame_tag.name.clone(),
        direction: frame_tag.direction.clone(),
    })
}

fn parse_loops(frame_tag: &AsepriteFrameTag) -> Result<Option<u32>, AtlasError> {
    let Some(repeat) = &frame_tag.repeat else {
        return Ok(None);
    };
    repeat
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| AtlasError::InvalidRepeat {
            tag: frame_tag.name.clone(),
            repeat: repeat.clone(),
        })
}

/// `index` is the frame's position within its tag, which is how slice keys
/// are numbered.
fn parse_cel(
    tag: &str,
    key: &str,
    frame: &AsepriteFrame,
    index: u32,
    slices: &[AsepriteSlice],
    factory: &mut CelIdFactory,
) -> Result<Cel, AtlasError> {
    let bounds = parse_bounds(key, frame)?;
    let duration = parse_duration(key, frame.duration)?;
    let slices = parse_slices(tag, index, slices);
    let slice_bounds = slices
        .iter()
        .fold(Rect::EMPTY, |union, slice| union.union(slice));
    Ok(Cel {
        id: factory.next_id(),
        bounds,
        duration,
        slice_bounds,
        slices,
    })
}

/// Packed bounds less the inner padding, which must split evenly on each side.
fn parse_bounds(key: &str, frame: &AsepriteFrame) -> Result<Rect, AtlasError> {
    let w = frame.frame.w - frame.source_size.w;
    let h = frame.frame.h - frame.source_size.h;
    if w % 2 != 0 || h % 2 != 0 {
        return Err(AtlasError::UnevenPadding {
            key: key.to_string(),
            w,
            h,
        });
    }
    Ok(Rect::new(
        frame.frame.x + w / 2,
        frame.frame.y + h / 2,
        frame.source_size.w,
        frame.source_size.h,
    ))
}

fn parse_duration(key: &str, duration: i64) -> Result<Millis, AtlasError> {
    if duration == ASEPRITE_INFINITE {
        return Ok(Millis::INFINITE);
    }
    // Aseprite stores frame durations as 16-bit values.
    match u32::try_from(duration) {
        Ok(millis) if (1..ASEPRITE_INFINITE).contains(&duration) => Ok(Millis::new(millis)),
        _ => Err(AtlasError::InvalidDuration {
            key: key.to_string(),
            duration,
        }),
    }
}

/// Bounds of every slice for `tag` active at `index`. Each slice contributes
/// its key with the greatest frame not after `index`; on equal frames the last
/// key listed wins.
fn parse_slices(tag: &str, index: u32, slices: &[AsepriteSlice]) -> Vec<Rect> {
    slices
        .iter()
        .filter(|slice| slice.name == tag)
        .filter_map(|slice| {
            slice
                .keys
                .iter()
                .filter(|key| key.frame <= index)
                .max_by_key(|key| key.frame)
        })
        .map(|key| key.bounds)
        .collect()
}

fn validate_area(tag: &str, wh: Wh, cels: &[Arc<Cel>]) -> Result<(), AtlasError> {
    let expected = wh.area();
    match cels
        .iter()
        .position(|cel| cel.bounds.wh().area() != expected)
    {
        Some(index) => Err(AtlasError::InconsistentCelArea {
            tag: tag.to_string(),
            index,
            expected,
            actual: cels[index].bounds.wh().area(),
        }),
        None => Ok(()),
    }
}

/// Forward may pause on its last cel and Reverse on its first. Ping-pong
/// films turn around at both ends so they may not pause at all.
fn validate_infinite(tag: &str, direction: Playback, cels: &[Arc<Cel>]) -> Result<(), AtlasError> {
    let last = cels.len() - 1;
    let allowed = |index: usize| match direction {
        Playback::Forward => index == last,
        Playback::Reverse => index == 0,
        Playback::PingPong | Playback::PingPongReverse => false,
    };
    match cels
        .iter()
        .enumerate()
        .find(|(index, cel)| cel.duration.is_infinite() && !allowed(*index))
    {
        Some((index, _)) => Err(AtlasError::IntermediateInfiniteDuration {
            tag: tag.to_string(),
            index,
            direction,
        }),
        None => Ok(()),
    }
}

/// Sum of cel durations, infinite if any cel is. A ping-pong cycle of more
/// than two cels also plays the inner cels on the way back.
fn film_duration(
    tag: &str,
    direction: Playback,
    cels: &[Arc<Cel>],
) -> Result<Millis, AtlasError> {
    if cels.iter().any(|cel| cel.duration.is_infinite()) {
        return Ok(Millis::INFINITE);
    }
    let overflow = || AtlasError::DurationOverflow {
        tag: tag.to_string(),
    };
    let sum = cels
        .iter()
        .try_fold(Millis::ZERO, |sum, cel| sum.checked_add(cel.duration))
        .ok_or_else(overflow)?;
    match cels {
        [first, .., last] if direction.is_ping_pong() && cels.len() > 2 => {
            // Every cel is finite and positive, so the ends fit within the sum.
            let inner = Millis::new(sum.get() - first.duration.get() - last.duration.get());
            sum.checked_add(inner).ok_or_else(overflow)
        }
        _ => Ok(sum),
    }
}
