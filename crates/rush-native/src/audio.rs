//! Fire-and-forget sound playback.

use std::collections::HashMap;
use std::path::PathBuf;

use macroquad::audio::{load_sound, play_sound_once, Sound};
use rush_engine::SoundEvent;

/// Sounds keyed by engine event. Missing or unloadable files degrade to a
/// logged warning; the game never fails over audio.
pub struct SoundBank {
    sounds: HashMap<SoundEvent, Sound>,
}

impl SoundBank {
    pub async fn load(paths: &HashMap<String, PathBuf>) -> Self {
        let mut sounds = HashMap::new();
        for event in SoundEvent::ALL {
            let Some(path) = paths.get(event.name()) else {
                log::warn!("no sound file mapped for {:?}", event);
                continue;
            };
            match load_sound(&path.to_string_lossy()).await {
                Ok(sound) => {
                    sounds.insert(event, sound);
                }
                Err(err) => {
                    log::warn!("failed to load sound {}: {err}", path.display());
                }
            }
        }
        Self { sounds }
    }

    pub fn play(&self, event: SoundEvent) {
        if let Some(sound) = self.sounds.get(&event) {
            play_sound_once(sound);
        }
    }
}
