use polyglot::domain::{AudioBuffer, AudioFormat};

#[test]
fn given_stereo_samples_when_creating_buffer_then_frames_count_pairs() {
    let buffer = AudioBuffer::new(vec![0.0; 8], 4, 2);

    assert_eq!(buffer.len(), 8);
    assert_eq!(buffer.frames(), 4);
    assert_eq!(buffer.channels(), 2);
}

#[test]
fn given_one_second_of_mono_audio_when_measuring_then_duration_is_one_second() {
    let buffer = AudioBuffer::mono(vec![0.0; 16_000], 16_000);

    assert!((buffer.duration_secs() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn given_zero_channels_when_creating_buffer_then_treated_as_mono() {
    let buffer = AudioBuffer::new(vec![0.1, 0.2], 8_000, 0);

    assert_eq!(buffer.channels(), 1);
    assert_eq!(buffer.frames(), 2);
}

#[test]
fn given_zero_sample_rate_when_measuring_then_duration_is_zero() {
    let buffer = AudioBuffer::mono(vec![0.0; 10], 0);

    assert_eq!(buffer.duration_secs(), 0.0);
}

#[test]
fn given_empty_buffer_when_checking_then_reports_empty() {
    let buffer = AudioBuffer::mono(Vec::new(), 16_000);

    assert!(buffer.is_empty());
}

#[test]
fn given_buffer_when_consumed_then_returns_original_samples() {
    let samples = vec![0.25, -0.5, 0.75];
    let buffer = AudioBuffer::mono(samples.clone(), 22_050);

    assert_eq!(buffer.samples(), samples.as_slice());
    assert_eq!(buffer.into_samples(), samples);
}

#[test]
fn given_wav_format_when_queried_then_reports_media_type_and_extension() {
    let format = AudioFormat::default();

    assert_eq!(format.media_type(), "audio/wav");
    assert_eq!(format.extension(), "wav");
    assert_eq!(format.to_string(), "wav");
}
