//! End-to-end playback and validation scenarios against Aseprite JSON.

use std::collections::BTreeSet;

use atlas_pack::{Animator, AtlasError, AtlasMeta, Millis, Playback, parse_atlas_json};

/// Build an export with one tag over frames `0..durations.len()`.
fn export(tag: &str, direction: &str, durations: &[i64], repeat: Option<&str>) -> String {
    let frames: Vec<String> = durations
        .iter()
        .enumerate()
        .map(|(i, duration)| {
            format!(
                r#""{tag}--{i}": {{
                    "frame": {{ "x": {x}, "y": 0, "w": 18, "h": 18 }},
                    "rotated": false,
                    "trimmed": false,
                    "spriteSourceSize": {{ "x": 0, "y": 0, "w": 16, "h": 16 }},
                    "sourceSize": {{ "w": 16, "h": 16 }},
                    "duration": {duration}
                }}"#,
                x = i * 18
            )
        })
        .collect();
    let repeat = repeat
        .map(|repeat| format!(r#", "repeat": "{repeat}""#))
        .unwrap_or_default();
    format!(
        r#"{{
            "frames": {{ {frames} }},
            "meta": {{
                "app": "http://www.aseprite.org/",
                "version": "1.3.2-x64",
                "image": "atlas.png",
                "format": "RGBA8888",
                "size": {{ "w": 256, "h": 256 }},
                "scale": "1",
                "frameTags": [
                    {{ "name": "{tag}", "from": 0, "to": {to}, "direction": "{direction}"{repeat} }}
                ],
                "slices": []
            }}
        }}"#,
        frames = frames.join(","),
        to = durations.len() - 1,
    )
}

fn atlas(direction: &str, durations: &[i64]) -> AtlasMeta {
    parse_atlas_json(&export("frog--idle", direction, durations, None), None).unwrap()
}

#[test]
fn scenario_a_two_forward_cels() {
    let atlas = atlas("forward", &[1, 1]);
    let film = atlas.film("frog--idle").unwrap();
    assert_eq!(film.period, Millis::new(1));
    let animator = Animator::new(film, 0.0);
    assert_eq!(animator.index(0.5), 0);
    assert_eq!(animator.index(1.0), 1);
    assert_eq!(animator.index(1.5), 1);
}

#[test]
fn scenario_b_five_forward_cels_cycle() {
    let atlas = atlas("forward", &[1; 5]);
    let animator = Animator::new(atlas.film("frog--idle").unwrap(), 0.0);
    let indices: Vec<_> = (0..15).map(|t| animator.index(t as f64)).collect();
    assert_eq!(indices, [0, 1, 2, 3, 4, 0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
}

#[test]
fn scenario_c_four_ping_pong_cels() {
    let atlas = atlas("pingpong", &[1; 4]);
    let film = atlas.film("frog--idle").unwrap();
    assert_eq!(film.duration, Millis::new(6));
    let animator = Animator::new(film, 0.0);
    let indices: Vec<_> = (0..16).map(|t| animator.index(t as f64)).collect();
    assert_eq!(indices, [0, 1, 2, 3, 2, 1, 0, 1, 2, 3, 2, 1, 0, 1, 2, 3]);
}

#[test]
fn scenario_d_infinite_last_cel_holds() {
    let atlas = atlas("forward", &[100, 100, 65535]);
    let film = atlas.film("frog--idle").unwrap();
    assert!(film.duration.is_infinite());
    let animator = Animator::new(film, 0.0);
    let last = film.cels.len() - 1;
    assert_eq!(animator.index(0.0), 0);
    assert_eq!(animator.index(150.0), 1);
    assert_eq!(animator.index(200.0), last);
    assert_eq!(animator.index(1e6), last);
    assert_eq!(animator.index(f64::MAX), last);
}

#[test]
fn scenario_e_missing_frame_for_walk() {
    let json = export("walk", "forward", &[1, 1], None).replace("\"walk--1\"", "\"run--1\"");
    let result = parse_atlas_json(&json, None);
    assert!(matches!(result, Err(AtlasError::MissingFrame { key }) if key == "walk--1"));
}

#[test]
fn uneven_durations_normalize() {
    let atlas = atlas("forward", &[100, 400, 200]);
    let film = atlas.film("frog--idle").unwrap();
    assert_eq!(film.period, Millis::new(100));
    assert_eq!(film.duration, Millis::new(700));
    let animator = Animator::new(film, 0.0);
    let ids: Vec<u32> = (0..8).map(|i| animator.cel_id(i as f64 * 100.0).0).collect();
    assert_eq!(ids, [0, 1, 1, 1, 1, 2, 2, 0]);
}

#[test]
fn ping_pong_reverse_loops_freeze() {
    let json = export("frog--hop", "pingpong_reverse", &[10, 10, 10, 10], Some("2"));
    let atlas = parse_atlas_json(&json, None).unwrap();
    let film = atlas.film("frog--hop").unwrap();
    assert_eq!(film.direction, Playback::PingPongReverse);
    assert_eq!(film.loops, Some(2));
    assert_eq!(film.duration, Millis::new(60));

    let animator = Animator::new(film, 0.0);
    let indices: Vec<_> = (0..12).map(|i| animator.index(i as f64 * 10.0)).collect();
    assert_eq!(indices, [3, 2, 1, 0, 1, 2, 3, 2, 1, 0, 1, 2]);
    for t in [120.0, 125.0, 500.0] {
        assert_eq!(animator.index(t), 2);
    }
}

#[test]
fn expected_ids_must_match_exactly() {
    let json = export("frog--idle", "forward", &[1], None);
    let ids: BTreeSet<String> = ["frog--idle".to_string()].into();
    assert!(parse_atlas_json(&json, Some(&ids)).is_ok());

    let ids: BTreeSet<String> = ["frog--idle".to_string(), "frog--walk".to_string()].into();
    assert!(matches!(
        parse_atlas_json(&json, Some(&ids)),
        Err(AtlasError::MissingIds { .. })
    ));
}

#[test]
fn atlas_json_roundtrip() {
    let atlas = atlas("pingpong", &[10, 20, 30, 20]);
    let json = atlas.to_json().unwrap();
    let decoded = AtlasMeta::from_json(&json).unwrap();
    assert_eq!(decoded, atlas);
    assert_eq!(decoded.to_json().unwrap(), json);
}
