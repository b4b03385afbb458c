use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

const ENEMY_DEATH_FILE: &str = "enemy-death.wav";
const SHOOT_FILE: &str = "shoot.wav";

type Sound = Buffered<Decoder<BufReader<File>>>;

/// Fire-and-forget sound triggers. Implementations must never fail the frame.
pub trait SoundEffects {
    fn enemy_death(&mut self);
    fn player_shot(&mut self);
}

/// No-op sound sink for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundEffects for Silent {
    fn enemy_death(&mut self) {}
    fn player_shot(&mut self) {}
}

/// Audio manager for playing sound effects
pub struct AudioManager {
    /// Keeps the device open; dropping it stops playback
    _stream: Option<OutputStream>,
    stream_handle: Option<OutputStreamHandle>,
    /// Pre-loaded and buffered sounds (None if loading failed)
    enemy_death: Option<Sound>,
    shoot: Option<Sound>,
}

impl AudioManager {
    /// Opens the default output device and pre-loads every sound from `sounds_dir`.
    /// A missing sound file only disables that sound.
    pub fn try_new(sounds_dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let (stream, stream_handle) = OutputStream::try_default()?;

        Ok(Self {
            _stream: Some(stream),
            stream_handle: Some(stream_handle),
            enemy_death: load_sound(&sounds_dir.join(ENEMY_DEATH_FILE)),
            shoot: load_sound(&sounds_dir.join(SHOOT_FILE)),
        })
    }

    /// Like [`AudioManager::try_new`], but falls back to silence when no device opens
    pub fn new(sounds_dir: &Path) -> Self {
        Self::try_new(sounds_dir).unwrap_or_else(|err| {
            warn!(%err, "failed to initialize audio, continuing without sound");
            Self::silent()
        })
    }

    /// An audio manager that never plays anything
    pub fn silent() -> Self {
        Self {
            _stream: None,
            stream_handle: None,
            enemy_death: None,
            shoot: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.stream_handle.is_some()
    }

    fn play(&self, sound: Option<&Sound>, volume: f32) {
        let (Some(handle), Some(sound)) = (&self.stream_handle, sound) else {
            return;
        };
        // Playback errors are dropped so the game keeps running
        if let Ok(sink) = Sink::try_new(handle) {
            sink.set_volume(volume);
            // Cloning a buffered source only clones references
            sink.append(sound.clone());
            sink.detach();
        }
    }
}

impl SoundEffects for AudioManager {
    fn enemy_death(&mut self) {
        self.play(self.enemy_death.as_ref(), 0.2);
    }

    fn player_shot(&mut self) {
        self.play(self.shoot.as_ref(), 0.1);
    }
}

fn load_sound(path: &Path) -> Option<Sound> {
    let loaded = File::open(path)
        .map_err(|err| err.to_string())
        .and_then(|file| Decoder::new(BufReader::new(file)).map_err(|err| err.to_string()));

    match loaded {
        Ok(source) => {
            debug!(path = %path.display(), "loaded sound");
            Some(source.buffered())
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "sound unavailable");
            None
        }
    }
}
