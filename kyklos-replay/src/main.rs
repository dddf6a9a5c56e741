//! Offline replay harness for the rep detector.
//!
//! Feeds recorded accelerometer traces (or a synthetic push-up waveform)
//! through [`RepDetector`] and prints detected events as CSV.

use std::{
    env,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    process,
};

use kyklos_core::config::DetectorConfig;
use kyklos_core::detector::{DetectorEvent, Phase, RepDetector};
use kyklos_core::sample::{AccelSample, STANDARD_GRAVITY};
use kyklos_core::signal::{Axis, SignalMode};
use kyklos_core::traits::{Accelerometer, SensorError};

/// Sample period of the synthetic waveform (50 Hz).
const STEP_MS: u64 = 20;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let mut trace_path: Option<PathBuf> = None;
    let mut expect_path: Option<PathBuf> = None;
    let mut synth_reps: Option<usize> = None;
    let mut sensitivity: Option<f32> = None;
    let mut mode: Option<SignalMode> = None;
    let mut dump_signal = false;

    let mut idx = 1usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--expect" => {
                idx += 1;
                let Some(path) = args.get(idx) else {
                    return Err("missing path after --expect".into());
                };
                expect_path = Some(PathBuf::from(path));
            }
            "--synth" => {
                idx += 1;
                let Some(value) = args.get(idx) else {
                    return Err("missing rep count after --synth".into());
                };
                let reps = value
                    .parse::<usize>()
                    .map_err(|e| format!("invalid rep count '{value}': {e}"))?;
                synth_reps = Some(reps);
            }
            "--sensitivity" => {
                idx += 1;
                let Some(value) = args.get(idx) else {
                    return Err("missing value after --sensitivity".into());
                };
                let parsed = value
                    .parse::<f32>()
                    .map_err(|e| format!("invalid sensitivity '{value}': {e}"))?;
                sensitivity = Some(parsed);
            }
            "--mode" => {
                idx += 1;
                let Some(value) = args.get(idx) else {
                    return Err("missing value after --mode".into());
                };
                mode = Some(parse_mode(value)?);
            }
            "--signal" => {
                dump_signal = true;
            }
            "-h" | "--help" => {
                println!("{}", usage());
                return Ok(());
            }
            value if value.starts_with('-') => {
                return Err(format!("unknown argument: {value}"));
            }
            value => {
                if trace_path.is_some() {
                    return Err("multiple trace paths provided".into());
                }
                trace_path = Some(PathBuf::from(value));
            }
        }
        idx += 1;
    }

    let mut config = DetectorConfig::default();
    if let Some(sensitivity) = sensitivity {
        config.sensitivity = sensitivity;
    }
    if let Some(mode) = mode {
        config.signal = mode;
    }
    config
        .validate()
        .map_err(|e| format!("invalid config: {e:?}"))?;

    let samples = match (trace_path.as_ref(), synth_reps) {
        (Some(_), Some(_)) => {
            return Err("pass either a trace path or --synth, not both".into());
        }
        (Some(path), None) => collect_samples(TraceSource::new(parse_trace(path)?))?,
        (None, Some(reps)) => collect_samples(SyntheticWave::new(reps))?,
        (None, None) => return Err(usage()),
    };

    let mut detector = RepDetector::new(config);
    let mut events: Vec<(u64, DetectorEvent)> = Vec::new();

    if dump_signal {
        println!("signal,ms,vertical_g,linear_g,phase");
    }
    for sample in &samples {
        let Some(output) = detector.process_sample(*sample) else {
            continue;
        };
        if dump_signal {
            println!(
                "signal,{},{:.4},{:.4},{}",
                output.timestamp_ms,
                output.vertical_g,
                output.linear_g,
                phase_label(output.phase)
            );
        }
        if let Some(event) = output.event {
            events.push((output.timestamp_ms, event));
        }
    }

    println!("event,ms,kind,count,trough_g,duration_ms");
    for (ms, event) in &events {
        match event {
            DetectorEvent::RepCounted {
                count,
                trough_g,
                duration_ms,
            } => {
                println!("event,{ms},rep,{count},{trough_g:.4},{duration_ms}");
            }
            DetectorEvent::CountReset => {
                println!("event,{ms},reset,0,0.0000,0");
            }
        }
    }

    if let Some(expect_path) = expect_path {
        let expected = parse_expected_counts(&expect_path)?;
        let actual: Vec<u32> = events.iter().map(|(_, event)| event.count()).collect();
        if actual != expected {
            eprintln!("expected counts: {}", join_counts(&expected));
            eprintln!("actual counts:   {}", join_counts(&actual));
            return Err("rep sequence mismatch".into());
        }
    }

    Ok(())
}

fn usage() -> String {
    "usage: kyklos-replay (<trace.csv> | --synth <reps>) \
     [--sensitivity <f>] [--mode projection|x|y|z] [--signal] [--expect counts.txt]"
        .to_string()
}

/// Replays a recorded trace through the sensor-polling interface.
struct TraceSource {
    samples: Vec<AccelSample>,
    cursor: usize,
}

impl TraceSource {
    fn new(samples: Vec<AccelSample>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl Accelerometer for TraceSource {
    fn poll_sample(&mut self) -> Result<Option<AccelSample>, SensorError> {
        let Some(sample) = self.samples.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        Ok(Some(*sample))
    }
}

/// Flat-device push-up waveform: per rep a descent dip, a rise overshoot,
/// then enough rest for the detector to settle.
struct SyntheticWave {
    samples: Vec<AccelSample>,
    cursor: usize,
}

impl SyntheticWave {
    fn new(reps: usize) -> Self {
        let mut samples = Vec::new();
        let mut t = 0u64;
        push_level(&mut samples, &mut t, 0.0, 1000);
        for _ in 0..reps {
            push_level(&mut samples, &mut t, -0.6, 260);
            push_level(&mut samples, &mut t, 0.5, 200);
            push_level(&mut samples, &mut t, 0.0, 1700);
        }
        Self { samples, cursor: 0 }
    }
}

impl Accelerometer for SyntheticWave {
    fn poll_sample(&mut self) -> Result<Option<AccelSample>, SensorError> {
        let Some(sample) = self.samples.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        Ok(Some(*sample))
    }
}

fn push_level(samples: &mut Vec<AccelSample>, t: &mut u64, level_g: f32, duration_ms: u64) {
    for _ in 0..duration_ms / STEP_MS {
        samples.push(AccelSample::new(
            0.0,
            0.0,
            STANDARD_GRAVITY * (1.0 + level_g),
            *t,
        ));
        *t += STEP_MS;
    }
}

fn collect_samples<S: Accelerometer>(mut source: S) -> Result<Vec<AccelSample>, String> {
    let mut out = Vec::new();
    loop {
        match source.poll_sample() {
            Ok(Some(sample)) => out.push(sample),
            Ok(None) => break,
            Err(err) => return Err(format!("sensor read failed: {err:?}")),
        }
    }
    Ok(out)
}

fn parse_trace(path: &Path) -> Result<Vec<AccelSample>, String> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let reader = BufReader::new(file);

    let mut out: Vec<AccelSample> = Vec::new();
    for (line_no, line_result) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line_result
            .map_err(|e| format!("failed to read {}:{}: {e}", path.display(), line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed == "accel_trace,ms,x,y,z" {
            continue;
        }

        let parts: Vec<&str> = trimmed.split(',').collect();
        if parts.len() < 5 {
            return Err(format!(
                "{}:{} invalid trace line, expected 5 columns",
                path.display(),
                line_no
            ));
        }
        if parts[0].trim() != "accel_trace" {
            continue;
        }

        let ms = parse_u64(parts[1], path, line_no, "ms")?;
        let x = parse_f32(parts[2], path, line_no, "x")?;
        let y = parse_f32(parts[3], path, line_no, "y")?;
        let z = parse_f32(parts[4], path, line_no, "z")?;

        out.push(AccelSample::new(x, y, z, ms));
    }

    Ok(out)
}

fn parse_expected_counts(path: &Path) -> Result<Vec<u32>, String> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let reader = BufReader::new(file);

    let mut counts = Vec::new();
    for (line_no, line_result) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line_result
            .map_err(|e| format!("failed to read {}:{}: {e}", path.display(), line_no))?;
        let token = line.trim();
        if token.is_empty() || token.starts_with('#') {
            continue;
        }

        let count = token.parse::<u32>().map_err(|e| {
            format!(
                "{}:{} invalid expected count '{}': {}",
                path.display(),
                line_no,
                token,
                e
            )
        })?;
        counts.push(count);
    }

    Ok(counts)
}

fn parse_mode(raw: &str) -> Result<SignalMode, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "projection" => Ok(SignalMode::Projection),
        "x" => Ok(SignalMode::FixedAxis(Axis::X)),
        "y" => Ok(SignalMode::FixedAxis(Axis::Y)),
        "z" => Ok(SignalMode::FixedAxis(Axis::Z)),
        _ => Err(format!("unknown signal mode: {raw}")),
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::DownPhase => "down",
    }
}

fn join_counts(counts: &[u32]) -> String {
    counts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_u64(raw: &str, path: &Path, line_no: usize, field: &str) -> Result<u64, String> {
    raw.trim().parse::<u64>().map_err(|e| {
        format!(
            "{}:{} invalid {} '{}': {}",
            path.display(),
            line_no,
            field,
            raw.trim(),
            e
        )
    })
}

fn parse_f32(raw: &str, path: &Path, line_no: usize, field: &str) -> Result<f32, String> {
    raw.trim().parse::<f32>().map_err(|e| {
        format!(
            "{}:{} invalid {} '{}': {}",
            path.display(),
            line_no,
            field,
            raw.trim(),
            e
        )
    })
}
