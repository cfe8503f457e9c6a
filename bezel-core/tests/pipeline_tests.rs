// bezel-core/tests/pipeline_tests.rs

use bezel_core::devices::{Anchor, CanvasSize, Orientation, Registry};
use bezel_core::error::CoreError;
use bezel_core::pipeline::{AudioDirective, FilterStep, MetadataDirective, ProcessingJob};
use bezel_core::paths::{expand_path_with, same_location};
use bezel_core::{OverlayConfig, RunRequest, build_job};
use std::path::{Path, PathBuf};

fn job_for(request: &RunRequest) -> Result<ProcessingJob, CoreError> {
    let registry = Registry::builtin()?;
    let profile = registry.lookup(&request.device, request.orientation)?;
    build_job(profile, request, &OverlayConfig::default())
}

#[test]
fn iphone_xs_max_portrait_defaults() {
    let job = job_for(&RunRequest::new("rec.mp4", "iphoneXSmax")).unwrap();

    assert_eq!(job.output, PathBuf::from("rec_overlay.mp4"));
    assert_eq!(job.canvas(), Some((CanvasSize::new(1032, 2050), Anchor::Center)));
    assert_eq!(job.overlay_anchor, Anchor::Center);
    assert_eq!(job.audio, AudioDirective::Drop);
    assert!(job.metadata.is_empty());

    let graph = job.filter_graph();
    assert!(graph.contains("pad=1032:2050:(ow-iw)/2:(oh-ih)/2:color=0x000000"));
    assert!(graph.contains("overlay=(main_w-overlay_w)/2:(main_h-overlay_h)/2"));
}

#[test]
fn imac_defaults_to_portrait_with_fixed_anchors() {
    let request = RunRequest::new("desk.mov", "imac27");
    assert_eq!(request.orientation, Orientation::Portrait);

    let job = job_for(&request).unwrap();
    assert_eq!(job.overlay_anchor, Anchor::Fixed { x: 0, y: 0 });
    assert_eq!(
        job.canvas(),
        Some((CanvasSize::new(3200, 2640), Anchor::Fixed { x: 320, y: 260 }))
    );

    let graph = job.filter_graph();
    assert!(graph.contains("pad=3200:2640:320:260:color="), "{graph}");
    assert!(graph.contains("overlay=0:0"), "{graph}");
    assert!(!graph.contains("(ow-iw)/2"), "{graph}");
}

#[test]
fn landscape_rotates_before_scaling() {
    let registry = Registry::builtin().unwrap();
    for device in registry.devices(Orientation::Landscape) {
        let mut request = RunRequest::new("rec.mp4", device);
        request.orientation = Orientation::Landscape;
        let job = job_for(&request).unwrap();

        assert!(job.transforms[0].is_rotation(), "{device}: {:?}", job.transforms);
        let rotations = job.transforms.iter().filter(|s| s.is_rotation()).count();
        assert_eq!(rotations, 1, "{device}");
        let scale = job.transforms.iter().position(FilterStep::is_scale).unwrap();
        assert!(scale > 0);
        assert!(job.filter_graph().starts_with("[0:v]transpose=2,scale="));
    }
}

#[test]
fn portrait_never_rotates() {
    let registry = Registry::builtin().unwrap();
    for device in registry.devices(Orientation::Portrait) {
        let job = job_for(&RunRequest::new("rec.mp4", device)).unwrap();
        assert!(
            !job.transforms.iter().any(FilterStep::is_rotation),
            "{device}: {:?}",
            job.transforms
        );
    }
}

#[test]
fn canvas_steps_follow_scaling_in_order() {
    let mut request = RunRequest::new("rec.mp4", "iphone8S");
    request.orientation = Orientation::Landscape;
    let job = job_for(&request).unwrap();

    let rendered: Vec<String> = job.transforms.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "transpose=2",
            "scale=1334:-1",
            "pad=1800:920:(ow-iw)/2:(oh-ih)/2:color=0x000000",
            "setsar=1",
            "format=rgb24",
        ]
    );
}

#[test]
fn rotation_reset_only_for_landscape_tablets() {
    let registry = Registry::builtin().unwrap();
    for (orientation, device, profile) in registry.profiles() {
        let mut request = RunRequest::new("rec.mp4", device);
        request.orientation = orientation;
        let job = job_for(&request).unwrap();

        let expected = profile.class == bezel_core::devices::DeviceClass::Tablet
            && orientation == Orientation::Landscape;
        assert_eq!(
            job.metadata.contains(&MetadataDirective::ResetRotation),
            expected,
            "{device} {orientation}"
        );
    }
}

#[test]
fn audio_copy_iff_requested() {
    let mut request = RunRequest::new("rec.mp4", "iphoneXS");
    assert_eq!(job_for(&request).unwrap().audio, AudioDirective::Drop);

    request.keep_audio = true;
    assert_eq!(job_for(&request).unwrap().audio, AudioDirective::Copy);
}

#[test]
fn background_color_reaches_the_pad_step() {
    let mut request = RunRequest::new("rec.mp4", "iphoneXS");
    request.background = "#ffffff".parse().unwrap();
    let graph = job_for(&request).unwrap().filter_graph();
    assert!(graph.contains(":color=0xFFFFFF,"), "{graph}");
}

#[test]
fn same_path_after_expansion_is_rejected() {
    let lookup = |var: &str| (var == "CLIPS").then(|| "/tmp/clips".to_string());
    let expanded = expand_path_with("$CLIPS/rec.mp4", lookup);
    assert!(same_location(&expanded, Path::new("/tmp/clips/./rec.mp4")));

    let mut request = RunRequest::new("/tmp/clips/rec.mp4", "iphoneXS");
    request.output = Some("/tmp/clips/./rec.mp4".to_string());
    match job_for(&request) {
        Err(CoreError::InvalidRequest(msg)) => assert!(msg.contains("same file"), "{msg}"),
        other => panic!("expected InvalidRequest, got {other:?}"),
    }
}

#[test]
fn relative_input_and_absolute_output_of_one_file_are_rejected() {
    let cwd = std::env::current_dir().unwrap();
    let mut request = RunRequest::new("rec.mp4", "iphoneXS");
    request.output = Some(cwd.join("rec.mp4").to_string_lossy().into_owned());

    match job_for(&request) {
        Err(CoreError::InvalidRequest(msg)) => assert!(msg.contains("same file"), "{msg}"),
        other => panic!("expected InvalidRequest, got {other:?}"),
    }
}

#[test]
fn explicit_output_is_expanded() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let mut request = RunRequest::new("rec.mp4", "watch44");
    request.output = Some("~/framed.mp4".to_string());
    let job = job_for(&request).unwrap();
    assert_eq!(job.output, home.join("framed.mp4"));
}

#[test]
fn custom_suffix_is_used_for_derived_output() {
    let registry = Registry::builtin().unwrap();
    let profile = registry.lookup("iphoneXS", Orientation::Portrait).unwrap();
    let config = OverlayConfig {
        output_suffix: "_framed".to_string(),
        ..OverlayConfig::default()
    };
    let job = build_job(profile, &RunRequest::new("clips/demo.mov", "iphoneXS"), &config).unwrap();
    assert_eq!(job.output, PathBuf::from("clips/demo_framed.mov"));
}
