//! End-to-end podcast generation against a mock speech service

mod harness;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use audio::AudioClip;
use harness::config::ConfigBuilder;
use harness::mock_tts::MockTts;
use podcaster_config::Voice;
use podcaster_core::{EXPORT_FORMAT, LINE_PAUSE, PodcastGenerator, PodcastRequest};

/// Audio length the mock returns for each request
const CLIP: Duration = Duration::from_millis(100);

fn files_in(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

fn exported_duration(path: &str) -> Duration {
    let bytes = std::fs::read(path).unwrap();
    AudioClip::decode(&bytes, EXPORT_FORMAT).unwrap().duration()
}

#[tokio::test]
async fn two_line_dialogue_produces_podcast_file() {
    let mock = MockTts::start().await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(dir.path()).with_base_url(&mock.base_url()).build();
    let generator = PodcastGenerator::from_config(config).unwrap();

    let request = PodcastRequest::new(
        "Test Show",
        "Alex: Hello, [emphasis]welcome[/emphasis].\nJordan: Thanks [pause-short] for having me.",
        5,
    )
    .unwrap();
    let response = generator.generate(&request).await.unwrap();

    assert!(response.success);
    assert_eq!(response.segments_processed, 2);
    assert_eq!(response.target_duration_min, 5);
    assert!(Path::new(response.audio_path()).is_file());
    assert_eq!(exported_duration(response.audio_path()), CLIP * 2 + LINE_PAUSE * 2);

    let received = mock.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].voice, "alloy");
    assert_eq!(received[0].input, "Hello, welcome.");
    assert_eq!(received[1].voice, "nova");
    assert_eq!(received[1].input, "Thanks , for having me.");
    assert!(received.iter().all(|r| r.model == "tts-1" && r.response_format == "pcm"));
}

#[tokio::test]
async fn configured_voices_follow_speakers() {
    let mock = MockTts::start().await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(dir.path())
        .with_base_url(&mock.base_url())
        .with_speakers(("Sam", Voice::Onyx), ("Riley", Voice::Shimmer))
        .build();
    let generator = PodcastGenerator::from_config(config).unwrap();

    let request = PodcastRequest::new("Voices", "Riley: First.\nSam: Second.\nRiley: Third.", 3).unwrap();
    let response = generator.generate(&request).await.unwrap();

    assert_eq!(response.speakers, "Sam and Riley");
    let voices: Vec<String> = mock.received().into_iter().map(|r| r.voice).collect();
    assert_eq!(voices, ["shimmer", "onyx", "shimmer"]);
}

#[tokio::test]
async fn long_line_is_synthesized_in_chunks() {
    let mock = MockTts::start().await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(dir.path()).with_base_url(&mock.base_url()).build();
    let generator = PodcastGenerator::from_config(config).unwrap();

    // 8999 characters once trimmed
    let dialogue = format!("Alex: {}", "word ".repeat(1_800));
    let request = PodcastRequest::new("Long Read", &dialogue, 10).unwrap();
    let response = generator.generate(&request).await.unwrap();

    assert_eq!(response.segments_processed, 1);
    assert_eq!(mock.request_count(), 3);

    let lengths: Vec<usize> = mock.received().iter().map(|r| r.input.chars().count()).collect();
    assert_eq!(lengths, [4_000, 4_000, 999]);
    assert_eq!(exported_duration(response.audio_path()), CLIP * 3 + LINE_PAUSE);
}

#[tokio::test]
async fn service_failure_mid_podcast_leaves_no_file() {
    let mock = MockTts::start_failing_after(1).await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(dir.path()).with_base_url(&mock.base_url()).build();
    let generator = PodcastGenerator::from_config(config).unwrap();

    let request = PodcastRequest::new("Broken", "Alex: One.\nJordan: Two.\nAlex: Three.", 10).unwrap();
    let error = generator.generate(&request).await.unwrap_err();

    assert!(!error.success);
    assert_eq!(error.error_type, "generation_error");
    assert!(error.error.contains("500"), "unexpected error: {}", error.error);
    assert_eq!(mock.request_count(), 2);
    assert_eq!(files_in(dir.path()), 0);
}

#[tokio::test]
async fn rejected_api_key_is_reported_as_authentication_failure() {
    let mock = MockTts::start().await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(dir.path())
        .with_base_url(&mock.base_url())
        .with_api_key("sk-wrong")
        .build();
    let generator = PodcastGenerator::from_config(config).unwrap();

    let request = PodcastRequest::new("Locked", "Alex: Hello there.\nJordan: Hi.", 10).unwrap();
    let error = generator.generate(&request).await.unwrap_err();

    assert!(error.error.contains("authentication failed"), "unexpected error: {}", error.error);
    assert!(mock.received().is_empty());
    assert_eq!(files_in(dir.path()), 0);
}

#[tokio::test]
async fn unlabeled_dialogue_never_reaches_service() {
    let mock = MockTts::start().await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(dir.path()).with_base_url(&mock.base_url()).build();
    let generator = PodcastGenerator::from_config(config).unwrap();

    let request = PodcastRequest::new("Nobody", "Narrator: Once upon a time there was a show.", 10).unwrap();
    let error = generator.generate(&request).await.unwrap_err();

    assert_eq!(error.error, "No valid speaker lines found in dialogue");
    assert_eq!(mock.request_count(), 0);
    assert_eq!(files_in(dir.path()), 0);
}

#[tokio::test]
async fn concurrent_requests_write_separate_files() {
    let mock = MockTts::start().await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(dir.path()).with_base_url(&mock.base_url()).build();
    let generator = Arc::new(PodcastGenerator::from_config(config).unwrap());

    let first = PodcastRequest::new("First Episode", "Alex: Morning.\nJordan: Morning!", 10).unwrap();
    let second = PodcastRequest::new("Second Episode", "Jordan: Evening.\nAlex: Evening!", 10).unwrap();

    let (a, b) = tokio::join!(generator.generate(&first), generator.generate(&second));
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_ne!(a.audio_path(), b.audio_path());
    assert!(a.audio_path().contains("podcast_FirstEpisode_"));
    assert!(b.audio_path().contains("podcast_SecondEpisode_"));
    assert_eq!(mock.request_count(), 4);
    assert_eq!(files_in(dir.path()), 2);
}
