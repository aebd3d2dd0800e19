use log::info;

/// Impacts at or below this strength stay silent
pub const DEFAULT_IMPACT_THRESHOLD: f32 = 1.5;

/// Fire-and-forget audio collaborator
pub trait ImpactSound {
    fn play_impact_sound(&mut self);
}

/// Logs cues instead of playing them
#[derive(Debug, Default)]
pub struct LogImpactSound {
    played: u64,
}

impl LogImpactSound {
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl ImpactSound for LogImpactSound {
    fn play_impact_sound(&mut self) {
        self.played += 1;
        info!("impact sound #{}", self.played);
    }
}

/// Decides which reported impacts are loud enough to play
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactTrigger {
    threshold: f32,
}

impl ImpactTrigger {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn should_play(&self, strength: f32) -> bool {
        strength > self.threshold
    }

    /// Plays the cue if `strength` clears the threshold
    pub fn on_impact(&self, strength: f32, sound: &mut dyn ImpactSound) -> bool {
        let play = self.should_play(strength);
        if play {
            sound.play_impact_sound();
        }
        play
    }
}

impl Default for ImpactTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_IMPACT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let trigger = ImpactTrigger::default();
        assert!(!trigger.should_play(1.5));
        assert!(trigger.should_play(1.5001));
        assert!(!trigger.should_play(0.2));
    }

    #[test]
    fn test_on_impact_plays_only_loud_hits() {
        let trigger = ImpactTrigger::new(1.0);
        let mut sound = LogImpactSound::default();
        assert!(!trigger.on_impact(0.9, &mut sound));
        assert!(trigger.on_impact(3.0, &mut sound));
        assert!(trigger.on_impact(1.1, &mut sound));
        assert_eq!(sound.played(), 2);
    }
}
