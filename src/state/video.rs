//! Campaign videos: tapping a box plays it and pauses every other one.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Paused,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoCommand {
    Pause(usize),
    Play(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct VideoGallery {
    playback: Vec<Playback>,
    /// Bumped on every tap so a retry after a refused `play()` still reads as a change.
    taps: u32,
}

impl VideoGallery {
    pub fn new(count: usize) -> Self {
        Self {
            playback: vec![Playback::Paused; count],
            taps: 0,
        }
    }

    pub fn playback(&self, index: usize) -> Option<Playback> {
        self.playback.get(index).copied()
    }

    pub fn is_playing(&self, index: usize) -> bool {
        self.playback(index) == Some(Playback::Playing)
    }

    pub fn playing(&self) -> Option<usize> {
        self.playback.iter().position(|p| *p == Playback::Playing)
    }

    /// A tap on box `index`: everything else pauses, then `index` toggles
    /// from what its element is really doing (`live`), not what was asked of it.
    pub fn press(&mut self, index: usize, live: Playback) {
        if index >= self.playback.len() {
            return;
        }
        self.taps = self.taps.wrapping_add(1);
        let next = match live {
            Playback::Paused => Playback::Playing,
            Playback::Playing => Playback::Paused,
        };
        for state in self.playback.iter_mut() {
            *state = Playback::Paused;
        }
        self.playback[index] = next;
    }

    pub fn ended(&mut self, index: usize) {
        if let Some(state) = self.playback.get_mut(index) {
            *state = Playback::Paused;
        }
    }

    /// Media calls that bring the elements (whose live state is `actual`)
    /// in line with the gallery. Pauses come first so two videos never play
    /// at once, even for a moment.
    pub fn reconcile(&self, actual: &[Playback]) -> Vec<VideoCommand> {
        let mut pauses = Vec::new();
        let mut plays = Vec::new();
        for (index, (want, have)) in self.playback.iter().zip(actual).enumerate() {
            match (want, have) {
                (Playback::Paused, Playback::Playing) => pauses.push(VideoCommand::Pause(index)),
                (Playback::Playing, Playback::Paused) => plays.push(VideoCommand::Play(index)),
                _ => {}
            }
        }
        pauses.extend(plays);
        pauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Playback::*;

    #[test]
    fn test_press_plays_paused_video() {
        let mut gallery = VideoGallery::new(3);
        gallery.press(1, Paused);
        assert_eq!(gallery.playing(), Some(1));
    }

    #[test]
    fn test_press_switches_to_other_video() {
        let mut gallery = VideoGallery::new(3);
        gallery.press(0, Paused);
        gallery.press(1, Paused);
        assert_eq!(gallery.playback(0), Some(Paused));
        assert_eq!(gallery.playback(1), Some(Playing));
        assert_eq!(gallery.playing(), Some(1));
    }

    #[test]
    fn test_press_playing_video_pauses_it() {
        let mut gallery = VideoGallery::new(2);
        gallery.press(0, Paused);
        gallery.press(0, Playing);
        assert_eq!(gallery.playing(), None);
    }

    #[test]
    fn test_press_after_refused_play_retries() {
        let mut gallery = VideoGallery::new(2);
        gallery.press(0, Paused);
        let first = gallery.clone();
        // The browser refused to play, so the element is still paused.
        gallery.press(0, Paused);
        assert_eq!(gallery.playback(0), Some(Playing));
        assert_ne!(gallery, first);
        assert_eq!(gallery.reconcile(&[Paused, Paused]), vec![VideoCommand::Play(0)]);
    }

    #[test]
    fn test_never_more_than_one_playing() {
        let mut gallery = VideoGallery::new(4);
        for index in [0, 2, 2, 3, 1, 0, 3] {
            let live = gallery.playback(index).unwrap_or(Paused);
            gallery.press(index, live);
            let playing = (0..4).filter(|i| gallery.is_playing(*i)).count();
            assert!(playing <= 1);
        }
    }

    #[test]
    fn test_ended_returns_to_paused() {
        let mut gallery = VideoGallery::new(2);
        gallery.press(1, Paused);
        gallery.ended(1);
        assert_eq!(gallery.playing(), None);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut gallery = VideoGallery::new(1);
        gallery.press(5, Paused);
        gallery.ended(5);
        assert_eq!(gallery, VideoGallery::new(1));
        assert_eq!(gallery.playback(5), None);
    }

    #[test]
    fn test_reconcile_pauses_before_playing() {
        let mut gallery = VideoGallery::new(2);
        gallery.press(0, Paused);
        gallery.press(1, Paused);
        let commands = gallery.reconcile(&[Playing, Paused]);
        assert_eq!(commands, vec![VideoCommand::Pause(0), VideoCommand::Play(1)]);
    }

    #[test]
    fn test_reconcile_in_sync_does_nothing() {
        let mut gallery = VideoGallery::new(3);
        gallery.press(2, Paused);
        assert!(gallery.reconcile(&[Paused, Paused, Playing]).is_empty());
    }
}
