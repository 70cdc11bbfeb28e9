//! arecord process management

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{CaptureError, Result};
use crate::{CHANNELS, SAMPLE_RATE};

/// How long a device probe may run before we assume the device works
/// (arecord blocks while happily capturing).
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// List capture devices reported by `arecord -l`, as `hw:N,0` names.
pub fn detect_devices() -> Vec<String> {
    let output = match Command::new("arecord").arg("-l").output() {
        Ok(output) => output,
        Err(_) => return Vec::new(),
    };
    if !output.status.success() {
        return Vec::new();
    }
    parse_device_list(&String::from_utf8_lossy(&output.stdout))
}

/// First device that survives a one-second throwaway capture, falling
/// back to `default` when none of the enumerated cards respond.
pub fn find_working_microphone() -> Option<String> {
    for device in detect_devices() {
        if probe_device(&device) {
            return Some(device);
        }
    }
    if probe_device("default") {
        return Some("default".to_string());
    }
    None
}

fn probe_device(device: &str) -> bool {
    let child = Command::new("arecord")
        .args(["-D", device, "-f", "S16_LE"])
        .args(["-r", &SAMPLE_RATE.to_string()])
        .args(["-c", &CHANNELS.to_string()])
        .args(["-d", "1", "/dev/null"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(_) => return false,
    };

    // Bounded wait; a wedged device would otherwise hang the probe.
    let deadline = std::time::Instant::now() + PROBE_TIMEOUT;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return status.success(),
            Ok(None) if std::time::Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                // Still capturing after the timeout means the device works.
                return true;
            }
            Ok(None) => std::thread::sleep(Duration::from_millis(50)),
            Err(_) => return false,
        }
    }
}

fn parse_device_list(listing: &str) -> Vec<String> {
    let mut devices = Vec::new();
    for line in listing.lines() {
        if !(line.contains("card") && line.contains("device")) {
            continue;
        }
        // "card 1: Mic [USB Mic], device 0: ..." -> "hw:1,0"
        let card_part = match line.split(':').next() {
            Some(part) => part.trim(),
            None => continue,
        };
        if let Some(card_num) = card_part.split_whitespace().nth(1) {
            let device = format!("hw:{card_num},0");
            if !devices.contains(&device) {
                devices.push(device);
            }
        }
    }
    devices
}

/// Spawns and supervises one `arecord` process per recording.
pub struct Recorder {
    device: String,
}

impl Recorder {
    /// Recorder bound to an explicit ALSA device name.
    pub fn new<S: Into<String>>(device: S) -> Self {
        Self {
            device: device.into(),
        }
    }

    /// Recorder on the first working microphone, or ALSA `default`.
    pub fn with_default_device() -> Self {
        let device = find_working_microphone().unwrap_or_else(|| {
            warn!("No working microphone detected, using ALSA default");
            "default".to_string()
        });
        Self::new(device)
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    /// Whether the arecord binary is on PATH.
    pub fn arecord_available() -> bool {
        match Command::new("arecord").arg("--version").output() {
            Ok(output) => output.status.success(),
            Err(_) => false,
        }
    }

    /// Quick availability probe for the configured microphone.
    pub fn check_microphone(&self) -> bool {
        Self::arecord_available() && probe_device(&self.device)
    }

    /// Begin capturing 16 kHz mono S16_LE audio to a temp WAV file.
    ///
    /// The returned handle must be stopped to obtain the path; dropping
    /// it kills the capture and removes nothing (arecord owns the file).
    pub fn start(&self) -> Result<RecordingHandle> {
        if !Self::arecord_available() {
            return Err(CaptureError::ArecordNotFound);
        }

        let wav_path = tempfile::Builder::new()
            .prefix("readback-")
            .suffix(".wav")
            .tempfile()?
            .into_temp_path()
            .keep()
            .map_err(|e| CaptureError::Spawn(e.to_string()))?;

        let child = Command::new("arecord")
            .args(["-D", &self.device, "-f", "S16_LE"])
            .args(["-r", &SAMPLE_RATE.to_string()])
            .args(["-c", &CHANNELS.to_string()])
            .arg(&wav_path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => {
                    CaptureError::DeviceNotFound(self.device.clone())
                }
                std::io::ErrorKind::PermissionDenied => {
                    CaptureError::PermissionDenied(err.to_string())
                }
                _ => CaptureError::Spawn(err.to_string()),
            })?;

        debug!(
            "Recording on {} to {}",
            self.device,
            wav_path.display()
        );
        Ok(RecordingHandle {
            child: Some(child),
            wav_path,
        })
    }
}

/// An in-flight recording.
pub struct RecordingHandle {
    child: Option<Child>,
    wav_path: PathBuf,
}

impl RecordingHandle {
    pub fn wav_path(&self) -> &PathBuf {
        &self.wav_path
    }

    /// Stop the capture and return the recorded WAV path.
    pub fn stop(mut self) -> Result<PathBuf> {
        let mut child = self.child.take().ok_or(CaptureError::NotRecording)?;
        // SIGKILL is fine here: arecord keeps the WAV header consistent
        // as it streams, so the file is playable up to the cut.
        let _ = child.kill();
        child.wait()?;
        debug!("Recording stopped: {}", self.wav_path.display());
        Ok(self.wav_path.clone())
    }
}

impl Drop for RecordingHandle {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARECORD_LISTING: &str = "\
**** List of CAPTURE Hardware Devices ****
card 0: PCH [HDA Intel PCH], device 0: ALC295 Analog [ALC295 Analog]
  Subdevices: 1/1
  Subdevice #0: subdevice #0
card 2: Mic [USB Mic], device 0: USB Audio [USB Audio]
  Subdevices: 1/1
  Subdevice #0: subdevice #0
";

    #[test]
    fn parses_cards_into_hw_names() {
        let devices = parse_device_list(ARECORD_LISTING);
        assert_eq!(devices, vec!["hw:0,0".to_string(), "hw:2,0".to_string()]);
    }

    #[test]
    fn ignores_non_device_lines() {
        assert!(parse_device_list("**** nothing here ****\n").is_empty());
        assert!(parse_device_list("").is_empty());
    }

    #[test]
    fn duplicate_cards_are_collapsed() {
        let listing = "\
card 1: A [A], device 0: x
card 1: A [A], device 1: y
";
        assert_eq!(parse_device_list(listing), vec!["hw:1,0".to_string()]);
    }

    #[test]
    fn recorder_remembers_device() {
        let recorder = Recorder::new("hw:3,0");
        assert_eq!(recorder.device(), "hw:3,0");
    }
}
