// SPDX-License-Identifier: MPL-2.0
//! Lesson player: transport state machine for the current lesson's media.
//!
//! Manages the lifecycle of lesson playback with clear state transitions
//! (see [`PlaybackPhase`]):
//! - Idle: no video lesson loaded
//! - Loading: source assigned, waiting for metadata
//! - Ready / Playing / Paused: normal transport
//! - Ended: reached the end; play restarts from 0
//! - Unavailable: metadata failed; duration-dependent controls are inert
//!
//! The player exclusively owns its [`MediaElement`]. Host events (metadata,
//! time updates, play/pause/ended, fullscreen changes, pointer and keyboard
//! input) enter as method calls; timing-sensitive ones carry an `Instant` so
//! the controls auto-hide countdown is deterministic.

use super::controls::{ControlsVisibility, OpenMenu};
use super::scrub::{BarGeometry, ScrubBar};
use super::shortcuts::{FocusTarget, Key, KeyOutcome, ShortcutAction};
use super::time_units::{clamp_position, known_duration, progress_ratio};
use crate::application::port::MediaElement;
use crate::application::query::CurriculumUiState;
use crate::config::Config;
use crate::domain::course::{Course, Lesson, LessonId};
use crate::domain::ui::OverlayTimeout;
use crate::domain::video::{PlaybackPhase, PlaybackRate, SkipStep, VideoQuality, Volume};
use crate::error::PlaybackError;
use std::time::Instant;

/// Player preferences seeded from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerSettings {
    pub volume: Volume,
    /// Mute state every lesson starts with.
    pub start_muted: bool,
    pub playback_rate: PlaybackRate,
    pub quality: VideoQuality,
    pub skip_step: SkipStep,
    pub overlay_timeout: OverlayTimeout,
}

impl PlayerSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            volume: config.video.volume(),
            start_muted: config.video.muted.unwrap_or(false),
            playback_rate: config.video.playback_rate(),
            quality: config.video.quality(),
            skip_step: config.video.skip_step(),
            overlay_timeout: config.fullscreen.overlay_timeout(),
        }
    }
}

/// Read-only view of the player for rendering and assertions.
// Allow excessive bools: flat UI snapshot with independent flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    pub lesson_id: Option<LessonId>,
    pub phase: PlaybackPhase,
    pub is_playing: bool,
    pub is_muted: bool,
    pub volume: Volume,
    pub playback_rate: PlaybackRate,
    pub quality: VideoQuality,
    pub current_time: f64,
    /// `None` until metadata provides a usable duration.
    pub duration: Option<f64>,
    pub progress_ratio: f64,
    pub is_dragging: bool,
    /// Preview time, only while the tooltip is shown.
    pub hover_time: Option<f64>,
    /// Tooltip x offset from the bar's left edge, only while shown.
    pub hover_tooltip_x: Option<f32>,
    pub is_fullscreen: bool,
    pub controls_visible: bool,
    pub speed_menu_open: bool,
    pub quality_menu_open: bool,
}

/// Playback controller for the current lesson.
pub struct LessonPlayer<M: MediaElement> {
    media: M,
    settings: PlayerSettings,

    lesson: Option<Lesson>,
    phase: PlaybackPhase,
    current_time: f64,
    duration: Option<f64>,

    volume: Volume,
    muted: bool,
    rate: PlaybackRate,
    quality: VideoQuality,

    fullscreen: bool,
    controls: ControlsVisibility,
    menu: OpenMenu,
    scrub: ScrubBar,
}

impl<M: MediaElement> LessonPlayer<M> {
    /// Creates an idle player that owns `media`.
    pub fn new(media: M, settings: PlayerSettings) -> Self {
        Self {
            media,
            lesson: None,
            phase: PlaybackPhase::Idle,
            current_time: 0.0,
            duration: None,
            volume: settings.volume,
            muted: settings.start_muted,
            rate: settings.playback_rate,
            quality: settings.quality,
            fullscreen: false,
            controls: ControlsVisibility::new(settings.overlay_timeout),
            menu: OpenMenu::None,
            scrub: ScrubBar::new(),
            settings,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    /// The lesson currently shown, whatever its kind.
    pub fn lesson(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// Returns a snapshot of every observable field.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        let tooltip = self.scrub.preview().filter(|_| self.scrub.tooltip_visible());
        PlaybackSnapshot {
            lesson_id: self.lesson.as_ref().map(|lesson| lesson.id),
            phase: self.phase,
            is_playing: self.phase.is_playing(),
            is_muted: self.muted,
            volume: self.volume,
            playback_rate: self.rate,
            quality: self.quality,
            current_time: self.current_time,
            duration: self.duration,
            progress_ratio: self.progress_ratio(),
            is_dragging: self.scrub.is_dragging(),
            hover_time: tooltip.map(|preview| preview.time_secs),
            hover_tooltip_x: tooltip.map(|preview| preview.tooltip_x),
            is_fullscreen: self.fullscreen,
            controls_visible: self.controls.is_visible(),
            speed_menu_open: self.menu.is_speed(),
            quality_menu_open: self.menu.is_quality(),
        }
    }

    /// `current_time / duration`, or 0 while the duration is unknown.
    pub fn progress_ratio(&self) -> f64 {
        self.duration
            .map_or(0.0, |duration| progress_ratio(self.current_time, duration))
    }

    /// Pending controls auto-hide deadline, for hosts scheduling `tick`.
    pub fn controls_deadline(&self) -> Option<Instant> {
        self.controls.deadline()
    }

    // =========================================================================
    // Lesson switching
    // =========================================================================

    /// Makes `lesson` current and resets all transport state.
    ///
    /// Volume, playback rate and quality carry over; mute returns to its
    /// configured start value. Only video lessons get a media source; other
    /// kinds unload the media and stay `Idle`.
    pub fn load_lesson(&mut self, lesson: &Lesson) {
        self.scrub.reset(&mut self.media);
        if self.fullscreen {
            self.media.exit_fullscreen();
            self.fullscreen = false;
        }
        self.controls.force_visible();
        self.menu = OpenMenu::None;

        self.phase = PlaybackPhase::Idle;
        self.current_time = 0.0;
        self.duration = None;
        self.muted = self.settings.start_muted;
        self.lesson = Some(lesson.clone());

        match lesson.video_source() {
            Some(source) => {
                self.media.load_source(source);
                self.media.set_volume(self.volume.value());
                self.media.set_muted(self.muted);
                self.media.set_playback_rate(self.rate.value());
                self.phase = PlaybackPhase::Loading;
                tracing::debug!(lesson = %lesson.id, source, "video lesson loaded");
            }
            None => {
                self.media.unload();
                tracing::debug!(lesson = %lesson.id, kind = lesson.kind.i18n_key(), "non-video lesson selected");
            }
        }
    }

    /// Selects a lesson from the curriculum and expands its topic.
    pub fn select_lesson(&mut self, course: &Course, lesson: &Lesson, ui: &mut CurriculumUiState) {
        self.load_lesson(lesson);
        ui.expand_topic_containing(course, lesson.id);
    }

    // =========================================================================
    // Media events
    // =========================================================================

    /// Media metadata arrived with `duration_secs`.
    ///
    /// A non-finite or non-positive duration marks the media unavailable.
    pub fn on_metadata_loaded(&mut self, duration_secs: f64) {
        if !self.awaiting_metadata() {
            tracing::debug!(phase = ?self.phase, "ignoring stale metadata event");
            return;
        }
        match known_duration(duration_secs) {
            Some(duration) => {
                self.duration = Some(duration);
                self.current_time = clamp_position(self.current_time, duration);
                if self.phase == PlaybackPhase::Loading {
                    self.phase = PlaybackPhase::Ready;
                }
                tracing::debug!(duration, "metadata loaded");
            }
            None => self.mark_unavailable(),
        }
    }

    /// The media element reported a load error.
    pub fn on_metadata_failed(&mut self) {
        if self.awaiting_metadata() {
            self.mark_unavailable();
        }
    }

    fn awaiting_metadata(&self) -> bool {
        self.duration.is_none() && matches!(self.phase, PlaybackPhase::Loading | PlaybackPhase::Playing)
    }

    fn mark_unavailable(&mut self) {
        tracing::warn!(
            lesson = ?self.lesson.as_ref().map(|lesson| lesson.id),
            "{}",
            PlaybackError::MediaUnavailable
        );
        self.phase = PlaybackPhase::Unavailable;
        self.duration = None;
        self.current_time = 0.0;
        self.controls.force_visible();
    }

    /// Periodic position report from the media element.
    pub fn on_time_update(&mut self, current_secs: f64) {
        if let Some(duration) = self.duration {
            self.current_time = clamp_position(current_secs, duration);
        }
    }

    /// The media element started playing (possibly on its own).
    pub fn on_play(&mut self, now: Instant) {
        if matches!(
            self.phase,
            PlaybackPhase::Loading | PlaybackPhase::Ready | PlaybackPhase::Paused | PlaybackPhase::Ended
        ) {
            self.phase = PlaybackPhase::Playing;
            self.refresh_controls(now);
        }
    }

    /// The media element paused (possibly on its own).
    pub fn on_pause(&mut self) {
        if self.phase.is_playing() {
            self.phase = PlaybackPhase::Paused;
            self.controls.force_visible();
        }
    }

    /// The media element reached the end.
    ///
    /// Media elements pause before reporting the end, so `Paused` is
    /// accepted as well as `Playing`.
    pub fn on_ended(&mut self) {
        if matches!(self.phase, PlaybackPhase::Playing | PlaybackPhase::Paused) {
            if let Some(duration) = self.duration {
                self.current_time = duration;
            }
            self.phase = PlaybackPhase::Ended;
            self.controls.force_visible();
            tracing::debug!("playback ended");
        }
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Toggles between playing and paused.
    ///
    /// From `Ended`, playback restarts at 0. No effect without a loadable
    /// video lesson.
    pub fn toggle_play(&mut self, now: Instant) {
        if !self.phase.accepts_toggle() {
            tracing::debug!(phase = ?self.phase, "toggle_play ignored");
            return;
        }
        match self.phase {
            PlaybackPhase::Playing => {
                self.media.pause();
                self.phase = PlaybackPhase::Paused;
                self.controls.force_visible();
            }
            PlaybackPhase::Ended => {
                self.current_time = 0.0;
                self.media.set_current_time(0.0);
                self.media.play();
                self.phase = PlaybackPhase::Playing;
                self.refresh_controls(now);
            }
            _ => {
                self.media.play();
                self.phase = PlaybackPhase::Playing;
                self.refresh_controls(now);
            }
        }
    }

    /// Flips mute; the volume level is kept.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if self.phase.has_media() {
            self.media.set_muted(self.muted);
        }
    }

    /// Sets the volume, clamped to `[0, 1]`. Does not change mute.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = Volume::new(volume);
        if self.phase.has_media() {
            self.media.set_volume(self.volume.value());
        }
    }

    /// Sets the playback rate and closes the speed menu.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::InvalidPlaybackRate`] if `rate` is not one of
    /// the allowed presets; the current rate is kept.
    pub fn set_playback_rate(&mut self, rate: f64) -> Result<(), PlaybackError> {
        let Some(rate) = PlaybackRate::try_new(rate) else {
            let err = PlaybackError::InvalidPlaybackRate(rate);
            tracing::warn!("{err}");
            return Err(err);
        };
        self.rate = rate;
        if self.phase.has_media() {
            self.media.set_playback_rate(rate.value());
        }
        if self.menu.is_speed() {
            self.menu = OpenMenu::None;
        }
        tracing::debug!(%rate, "playback rate changed");
        Ok(())
    }

    /// Sets the preferred quality and closes the quality menu.
    pub fn set_quality(&mut self, quality: VideoQuality) {
        self.quality = quality;
        if self.menu.is_quality() {
            self.menu = OpenMenu::None;
        }
        tracing::debug!(%quality, "quality changed");
    }

    /// Seeks to `secs`, clamped to `[0, duration]`.
    ///
    /// No-op until the duration is known. Seeking away from the end leaves
    /// `Ended` for `Paused`.
    pub fn seek_to(&mut self, secs: f64) {
        let Some(duration) = self.seekable_duration() else {
            tracing::warn!(target_secs = secs, "seek ignored: duration unknown");
            return;
        };
        let target = clamp_position(secs, duration);
        self.current_time = target;
        self.media.set_current_time(target);
        if self.phase == PlaybackPhase::Ended && target < duration {
            self.phase = PlaybackPhase::Paused;
        }
    }

    /// Seeks relative to the current position.
    pub fn skip_by(&mut self, delta_secs: f64) {
        self.seek_to(self.current_time + delta_secs);
    }

    pub fn skip_forward(&mut self) {
        self.skip_by(self.settings.skip_step.value());
    }

    pub fn skip_backward(&mut self) {
        self.skip_by(-self.settings.skip_step.value());
    }

    fn seekable_duration(&self) -> Option<f64> {
        if self.phase.has_media() && !self.phase.is_unavailable() {
            self.duration
        } else {
            None
        }
    }

    // =========================================================================
    // Scrub bar
    // =========================================================================

    /// Single click on the bar: seek to the clicked fraction.
    pub fn scrub_click(&mut self, x: f32, bar: BarGeometry) {
        if let Some(duration) = self.seekable_duration() {
            self.seek_to(bar.fraction_at(x) * duration);
        }
    }

    /// Press on the bar: seek there and start dragging.
    pub fn scrub_press(&mut self, x: f32, bar: BarGeometry) {
        let Some(duration) = self.seekable_duration() else {
            return;
        };
        self.scrub.begin_drag(&mut self.media);
        let time = self.scrub.track(x, bar, duration);
        self.seek_to(time);
    }

    pub fn scrub_enter(&mut self) {
        self.scrub.pointer_entered();
    }

    pub fn scrub_leave(&mut self) {
        self.scrub.pointer_left();
    }

    /// Pointer moving over the bar: updates the preview only.
    pub fn scrub_hover(&mut self, x: f32, bar: BarGeometry) {
        let duration = self.duration.unwrap_or(0.0);
        self.scrub.track(x, bar, duration);
    }

    /// Window-wide pointer movement.
    ///
    /// While dragging, seeks live to the pointer's fraction of `bar`. In
    /// fullscreen while playing, restarts the controls countdown.
    pub fn pointer_moved(&mut self, x: f32, bar: BarGeometry, now: Instant) {
        if self.scrub.is_dragging() {
            if let Some(duration) = self.seekable_duration() {
                let time = self.scrub.track(x, bar, duration);
                self.seek_to(time);
            }
        }
        if self.fullscreen && self.phase.is_playing() {
            self.controls.arm(now);
        }
    }

    /// Window-wide pointer release: ends any drag.
    pub fn pointer_released(&mut self) {
        if self.scrub.end_drag(&mut self.media) {
            tracing::debug!(position = self.current_time, "scrub drag ended");
        }
    }

    // =========================================================================
    // Fullscreen and controls
    // =========================================================================

    /// Requests fullscreen from the host.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NoVideoLesson`] without a video lesson, or
    /// [`PlaybackError::FullscreenDenied`] if the host refuses. Neither
    /// changes any state.
    pub fn enter_fullscreen(&mut self, now: Instant) -> Result<(), PlaybackError> {
        if self.fullscreen {
            return Ok(());
        }
        if !self.phase.has_media() {
            return Err(PlaybackError::NoVideoLesson);
        }
        if let Err(refused) = self.media.request_fullscreen() {
            let err = PlaybackError::FullscreenDenied(refused.0);
            tracing::warn!("{err}");
            return Err(err);
        }
        self.fullscreen = true;
        self.refresh_controls(now);
        tracing::debug!("entered fullscreen");
        Ok(())
    }

    pub fn exit_fullscreen(&mut self) {
        if self.fullscreen {
            self.media.exit_fullscreen();
            self.fullscreen = false;
            self.controls.force_visible();
            tracing::debug!("exited fullscreen");
        }
    }

    /// # Errors
    ///
    /// See [`Self::enter_fullscreen`].
    pub fn toggle_fullscreen(&mut self, now: Instant) -> Result<(), PlaybackError> {
        if self.fullscreen {
            self.exit_fullscreen();
            Ok(())
        } else {
            self.enter_fullscreen(now)
        }
    }

    /// The host's fullscreen state changed (e.g. the user left it with the
    /// browser's own control).
    pub fn on_fullscreen_changed(&mut self, active: bool, now: Instant) {
        if self.fullscreen != active {
            self.fullscreen = active;
            self.refresh_controls(now);
        }
    }

    /// Advances timers; hides the controls and closes menus when the
    /// countdown elapses. Returns `true` if the controls were hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.controls.tick(now) {
            self.menu = OpenMenu::None;
            tracing::debug!("controls hidden after inactivity");
            true
        } else {
            false
        }
    }

    fn refresh_controls(&mut self, now: Instant) {
        if self.fullscreen && self.phase.is_playing() {
            self.controls.arm(now);
        } else {
            self.controls.force_visible();
        }
    }

    pub fn toggle_speed_menu(&mut self) {
        self.menu = self.menu.toggled(OpenMenu::Speed);
    }

    pub fn toggle_quality_menu(&mut self) {
        self.menu = self.menu.toggled(OpenMenu::Quality);
    }

    pub fn close_menus(&mut self) {
        self.menu = OpenMenu::None;
    }

    /// Press on the video surface outside the menus.
    pub fn surface_pressed(&mut self) {
        self.close_menus();
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Handles a key press.
    ///
    /// Shortcuts only apply while a video lesson is current and focus is not
    /// in a text entry element. Any other key still closes the menus.
    pub fn handle_key(&mut self, key: Key, focus: FocusTarget, now: Instant) -> KeyOutcome {
        if !self.phase.has_media() || focus.is_text_entry() {
            return KeyOutcome::Ignored;
        }
        self.close_menus();

        let Some(action) = ShortcutAction::for_key(key) else {
            return KeyOutcome::Unbound;
        };
        match action {
            ShortcutAction::TogglePlay => self.toggle_play(now),
            ShortcutAction::SkipBackward => self.skip_backward(),
            ShortcutAction::SkipForward => self.skip_forward(),
            ShortcutAction::ToggleFullscreen => {
                // Refusal is logged and leaves state untouched.
                let _ = self.toggle_fullscreen(now);
            }
            ShortcutAction::ToggleMute => self.toggle_mute(),
            ShortcutAction::ExitFullscreen => {
                if !self.fullscreen {
                    return KeyOutcome::Unbound;
                }
                self.exit_fullscreen();
            }
        }
        self.refresh_controls(now);
        KeyOutcome::Handled(action)
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Tears the player down: cancels the countdown, releases any pointer
    /// capture and leaves fullscreen. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.scrub.reset(&mut self.media);
        self.controls.force_visible();
        self.menu = OpenMenu::None;
        if self.fullscreen {
            self.media.exit_fullscreen();
            self.fullscreen = false;
        }
        if self.lesson.take().is_some() {
            tracing::debug!("lesson player unmounted");
        }
        self.phase = PlaybackPhase::Idle;
        self.current_time = 0.0;
        self.duration = None;
    }
}

impl<M: MediaElement> Drop for LessonPlayer<M> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<M: MediaElement + std::fmt::Debug> std::fmt::Debug for LessonPlayer<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LessonPlayer")
            .field("media", &self.media)
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{MediaCommand, RecordingMedia};
    use crate::domain::course::fixtures::{quiz, video};
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    const BAR: BarGeometry = BarGeometry {
        left: 0.0,
        width: 200.0,
    };

    fn player() -> LessonPlayer<RecordingMedia> {
        LessonPlayer::new(RecordingMedia::new(), PlayerSettings::default())
    }

    /// A player with video #1 loaded and 100s of metadata.
    fn ready_player() -> LessonPlayer<RecordingMedia> {
        let mut player = player();
        player.load_lesson(&video(1, "Intro"));
        player.on_metadata_loaded(100.0);
        player
    }

    fn count(player: &LessonPlayer<RecordingMedia>, command: &MediaCommand) -> usize {
        player.media().count(|c| c == command)
    }

    #[test]
    fn loading_video_goes_through_loading_to_ready() {
        let mut player = player();
        assert_eq!(player.phase(), PlaybackPhase::Idle);

        player.load_lesson(&video(1, "Intro"));
        assert_eq!(player.phase(), PlaybackPhase::Loading);
        assert!(player
            .media()
            .commands
            .iter()
            .any(|c| matches!(c, MediaCommand::LoadSource(s) if s.ends_with("1.mp4"))));

        player.on_metadata_loaded(100.0);
        assert_eq!(player.phase(), PlaybackPhase::Ready);
        assert_eq!(player.snapshot().duration, Some(100.0));
    }

    #[test]
    fn non_video_lesson_is_current_without_transport() {
        let mut player = ready_player();
        player.load_lesson(&quiz(2, "Check"));

        let snap = player.snapshot();
        assert_eq!(snap.lesson_id, Some(LessonId(2)));
        assert_eq!(snap.phase, PlaybackPhase::Idle);
        assert_eq!(snap.duration, None);
        assert_eq!(count(&player, &MediaCommand::Unload), 1);

        let now = Instant::now();
        player.toggle_play(now);
        assert_eq!(player.phase(), PlaybackPhase::Idle);
        assert_eq!(count(&player, &MediaCommand::Play), 0);
    }

    #[test]
    fn toggle_play_without_lesson_is_noop() {
        let mut player = player();
        player.toggle_play(Instant::now());
        assert!(player.media().commands.is_empty());
        assert!(!player.snapshot().is_playing);
    }

    #[test]
    fn toggle_play_flips_between_playing_and_paused() {
        let mut player = ready_player();
        let now = Instant::now();
        player.toggle_play(now);
        assert!(player.snapshot().is_playing);
        player.toggle_play(now);
        assert_eq!(player.phase(), PlaybackPhase::Paused);
        assert_eq!(count(&player, &MediaCommand::Pause), 1);
    }

    #[test]
    fn replay_after_end_restarts_from_zero() {
        let mut player = ready_player();
        let now = Instant::now();
        player.toggle_play(now);
        player.on_time_update(99.9);
        player.on_ended();
        assert_eq!(player.phase(), PlaybackPhase::Ended);
        assert_abs_diff_eq!(player.snapshot().current_time, 100.0);

        player.toggle_play(now);
        assert_eq!(player.phase(), PlaybackPhase::Playing);
        assert_abs_diff_eq!(player.snapshot().current_time, 0.0);
        assert_eq!(player.media().last_seek(), Some(0.0));
    }

    #[test]
    fn end_reported_after_pause_still_restarts_on_replay() {
        let mut player = ready_player();
        let now = Instant::now();
        player.toggle_play(now);
        player.on_time_update(100.0);
        player.on_pause();
        player.on_ended();
        assert_eq!(player.phase(), PlaybackPhase::Ended);

        player.toggle_play(now);
        assert_eq!(player.phase(), PlaybackPhase::Playing);
        assert_abs_diff_eq!(player.snapshot().current_time, 0.0);
        assert_eq!(player.media().last_seek(), Some(0.0));
    }

    #[test]
    fn ended_ignored_without_playback() {
        let mut player = ready_player();
        player.on_ended();
        assert_eq!(player.phase(), PlaybackPhase::Ready);
    }

    #[test]
    fn seek_from_end_pauses() {
        let mut player = ready_player();
        player.toggle_play(Instant::now());
        player.on_ended();
        player.seek_to(40.0);
        assert_eq!(player.phase(), PlaybackPhase::Paused);
    }

    #[test]
    fn seek_is_clamped() {
        let mut player = ready_player();
        player.seek_to(-5.0);
        assert_abs_diff_eq!(player.snapshot().current_time, 0.0);
        player.seek_to(200.0);
        assert_abs_diff_eq!(player.snapshot().current_time, 100.0);
        assert_abs_diff_eq!(player.snapshot().progress_ratio, 1.0);
    }

    #[test]
    fn seek_before_metadata_is_ignored() {
        let mut player = player();
        player.load_lesson(&video(1, "Intro"));
        player.seek_to(30.0);
        assert_abs_diff_eq!(player.snapshot().current_time, 0.0);
        assert_eq!(player.media().last_seek(), None);
    }

    #[test]
    fn skip_uses_configured_step() {
        let mut player = ready_player();
        player.skip_forward();
        assert_abs_diff_eq!(player.snapshot().current_time, 10.0);
        player.skip_by(-25.0);
        assert_abs_diff_eq!(player.snapshot().current_time, 0.0);
        player.seek_to(95.0);
        player.skip_forward();
        assert_abs_diff_eq!(player.snapshot().current_time, 100.0);
    }

    #[test]
    fn invalid_metadata_marks_unavailable() {
        for bad in [f64::NAN, 0.0, f64::INFINITY] {
            let mut player = player();
            player.load_lesson(&video(1, "Intro"));
            player.on_metadata_loaded(bad);
            let snap = player.snapshot();
            assert_eq!(snap.phase, PlaybackPhase::Unavailable);
            assert_abs_diff_eq!(snap.progress_ratio, 0.0);
            assert!(!snap.progress_ratio.is_nan());

            player.seek_to(10.0);
            player.toggle_play(Instant::now());
            assert_eq!(player.phase(), PlaybackPhase::Unavailable);
        }
    }

    #[test]
    fn metadata_failure_event_marks_unavailable() {
        let mut player = player();
        player.load_lesson(&video(1, "Intro"));
        player.on_metadata_failed();
        assert!(player.phase().is_unavailable());
    }

    #[test]
    fn progress_ratio_tracks_time_updates() {
        let mut player = ready_player();
        player.on_time_update(25.0);
        assert_abs_diff_eq!(player.progress_ratio(), 0.25);
    }

    #[test]
    fn mute_and_volume_are_independent() {
        let mut player = ready_player();
        player.set_volume(0.4);
        player.toggle_mute();
        let snap = player.snapshot();
        assert!(snap.is_muted);
        assert_abs_diff_eq!(snap.volume.value(), 0.4);

        player.toggle_mute();
        assert_abs_diff_eq!(player.snapshot().volume.value(), 0.4);

        player.set_volume(0.0);
        assert!(!player.snapshot().is_muted);
        player.set_volume(7.0);
        assert_abs_diff_eq!(player.snapshot().volume.value(), 1.0);
    }

    #[test]
    fn invalid_rate_is_rejected_and_rate_kept() {
        let mut player = ready_player();
        player.set_playback_rate(1.5).unwrap();
        let err = player.set_playback_rate(3.0).unwrap_err();
        assert_eq!(err, PlaybackError::InvalidPlaybackRate(3.0));
        assert_abs_diff_eq!(player.snapshot().playback_rate.value(), 1.5);
    }

    #[test]
    fn rate_change_keeps_playing() {
        let mut player = ready_player();
        player.toggle_play(Instant::now());
        player.set_playback_rate(2.0).unwrap();
        assert!(player.snapshot().is_playing);
        assert_eq!(count(&player, &MediaCommand::SetPlaybackRate(2.0)), 1);
    }

    #[test]
    fn lesson_switch_resets_transport_and_keeps_preferences() {
        let mut player = ready_player();
        let now = Instant::now();
        player.toggle_play(now);
        player.on_time_update(42.0);
        player.set_volume(0.3);
        player.set_playback_rate(1.25).unwrap();
        player.set_quality(VideoQuality::P720);
        player.toggle_mute();

        player.load_lesson(&video(3, "Deep dive"));
        let snap = player.snapshot();
        assert!(!snap.is_playing);
        assert_abs_diff_eq!(snap.current_time, 0.0);
        assert_abs_diff_eq!(snap.progress_ratio, 0.0);
        assert_eq!(snap.duration, None);
        assert!(!snap.is_muted);
        assert_abs_diff_eq!(snap.volume.value(), 0.3);
        assert_abs_diff_eq!(snap.playback_rate.value(), 1.25);
        assert_eq!(snap.quality, VideoQuality::P720);
        assert_eq!(player.media().commands.last(), Some(&MediaCommand::SetPlaybackRate(1.25)));
    }

    #[test]
    fn hover_never_seeks_but_drag_does() {
        let mut player = ready_player();
        let now = Instant::now();

        player.scrub_enter();
        player.scrub_hover(50.0, BAR);
        let snap = player.snapshot();
        assert_abs_diff_eq!(snap.current_time, 0.0);
        assert_eq!(snap.hover_time, Some(25.0));
        assert!(!snap.is_dragging);

        player.scrub_press(100.0, BAR);
        assert_abs_diff_eq!(player.snapshot().current_time, 50.0);
        player.pointer_moved(300.0, BAR, now);
        assert_abs_diff_eq!(player.snapshot().current_time, 100.0);
        player.pointer_moved(-40.0, BAR, now);
        assert_abs_diff_eq!(player.snapshot().current_time, 0.0);

        player.pointer_released();
        player.pointer_moved(150.0, BAR, now);
        player.scrub_hover(150.0, BAR);
        let snap = player.snapshot();
        assert_abs_diff_eq!(snap.current_time, 0.0);
        assert_eq!(snap.hover_time, Some(75.0));
    }

    #[test]
    fn click_seeks_without_dragging() {
        let mut player = ready_player();
        player.scrub_click(150.0, BAR);
        let snap = player.snapshot();
        assert_abs_diff_eq!(snap.current_time, 75.0);
        assert!(!snap.is_dragging);
        assert_eq!(count(&player, &MediaCommand::CapturePointer), 0);
    }

    #[test]
    fn drag_capture_released_on_lesson_switch() {
        let mut player = ready_player();
        player.scrub_press(10.0, BAR);
        player.load_lesson(&video(3, "Deep dive"));
        player.pointer_released();
        player.unmount();

        assert!(!player.snapshot().is_dragging);
        assert_eq!(count(&player, &MediaCommand::CapturePointer), 1);
        assert_eq!(count(&player, &MediaCommand::ReleasePointer), 1);
    }

    #[test]
    fn press_before_metadata_does_not_capture() {
        let mut player = player();
        player.load_lesson(&video(1, "Intro"));
        player.scrub_press(10.0, BAR);
        assert!(!player.snapshot().is_dragging);
        assert_eq!(count(&player, &MediaCommand::CapturePointer), 0);
    }

    #[test]
    fn controls_hide_three_seconds_after_last_move() {
        let start = Instant::now();
        let mut player = ready_player();
        player.enter_fullscreen(start).unwrap();
        player.toggle_play(start);

        player.pointer_moved(0.0, BAR, start + Duration::from_millis(500));
        player.pointer_moved(0.0, BAR, start + Duration::from_millis(1000));

        assert!(!player.tick(start + Duration::from_millis(3500)));
        assert!(player.snapshot().controls_visible);
        assert!(player.tick(start + Duration::from_millis(4000)));
        assert!(!player.snapshot().controls_visible);
        assert!(!player.tick(start + Duration::from_millis(9000)));
    }

    #[test]
    fn hiding_controls_closes_menus() {
        let start = Instant::now();
        let mut player = ready_player();
        player.enter_fullscreen(start).unwrap();
        player.toggle_play(start);
        player.toggle_speed_menu();
        assert!(player.snapshot().speed_menu_open);

        player.tick(start + Duration::from_secs(3));
        let snap = player.snapshot();
        assert!(!snap.controls_visible);
        assert!(!snap.speed_menu_open);
    }

    #[test]
    fn pausing_or_leaving_fullscreen_shows_controls() {
        let start = Instant::now();
        let mut player = ready_player();
        player.enter_fullscreen(start).unwrap();
        player.toggle_play(start);
        player.tick(start + Duration::from_secs(3));
        assert!(!player.snapshot().controls_visible);

        player.toggle_play(start + Duration::from_secs(4));
        assert!(player.snapshot().controls_visible);
        assert!(player.controls_deadline().is_none());

        player.toggle_play(start + Duration::from_secs(5));
        assert!(player.controls_deadline().is_some());
        player.exit_fullscreen();
        assert!(player.snapshot().controls_visible);
        assert!(player.controls_deadline().is_none());
    }

    #[test]
    fn no_countdown_outside_fullscreen() {
        let start = Instant::now();
        let mut player = ready_player();
        player.toggle_play(start);
        player.pointer_moved(10.0, BAR, start);
        assert!(player.controls_deadline().is_none());
        assert!(!player.tick(start + Duration::from_secs(60)));
    }

    #[test]
    fn denied_fullscreen_changes_nothing() {
        let mut player = LessonPlayer::new(RecordingMedia::denying_fullscreen(), PlayerSettings::default());
        player.load_lesson(&video(1, "Intro"));
        player.on_metadata_loaded(100.0);
        let start = Instant::now();
        player.toggle_play(start);
        let before = player.snapshot();

        let err = player.enter_fullscreen(start).unwrap_err();
        assert!(matches!(err, PlaybackError::FullscreenDenied(_)));
        assert_eq!(player.snapshot(), before);
        assert!(player.controls_deadline().is_none());
        assert!(!player.tick(start + Duration::from_secs(10)));
    }

    #[test]
    fn host_fullscreen_exit_is_synced() {
        let start = Instant::now();
        let mut player = ready_player();
        player.enter_fullscreen(start).unwrap();
        player.toggle_play(start);
        player.on_fullscreen_changed(false, start);
        let snap = player.snapshot();
        assert!(!snap.is_fullscreen);
        assert!(snap.controls_visible);
        assert!(player.controls_deadline().is_none());
    }

    #[test]
    fn menus_are_exclusive_and_close_on_selection() {
        let mut player = ready_player();
        player.toggle_speed_menu();
        player.toggle_quality_menu();
        let snap = player.snapshot();
        assert!(snap.quality_menu_open && !snap.speed_menu_open);

        player.set_quality(VideoQuality::P480);
        assert!(!player.snapshot().quality_menu_open);

        player.toggle_speed_menu();
        player.set_playback_rate(0.5).unwrap();
        assert!(!player.snapshot().speed_menu_open);

        player.toggle_speed_menu();
        player.surface_pressed();
        assert!(!player.snapshot().speed_menu_open);
    }

    #[test]
    fn shortcuts_drive_transport() {
        let now = Instant::now();
        let mut player = ready_player();

        let outcome = player.handle_key(Key::Space, FocusTarget::Page, now);
        assert_eq!(outcome, KeyOutcome::Handled(ShortcutAction::TogglePlay));
        assert!(outcome.prevents_default());
        assert!(player.snapshot().is_playing);

        player.handle_key(Key::ArrowRight, FocusTarget::Page, now);
        player.handle_key(Key::ArrowRight, FocusTarget::Page, now);
        player.handle_key(Key::ArrowLeft, FocusTarget::Page, now);
        assert_abs_diff_eq!(player.snapshot().current_time, 10.0);

        player.handle_key(Key::Char('M'), FocusTarget::Page, now);
        assert!(player.snapshot().is_muted);

        player.handle_key(Key::Char('f'), FocusTarget::Page, now);
        assert!(player.snapshot().is_fullscreen);
        let outcome = player.handle_key(Key::Escape, FocusTarget::Page, now);
        assert_eq!(outcome, KeyOutcome::Handled(ShortcutAction::ExitFullscreen));
        assert!(!player.snapshot().is_fullscreen);
        assert_eq!(
            player.handle_key(Key::Escape, FocusTarget::Page, now),
            KeyOutcome::Unbound
        );
    }

    #[test]
    fn typing_suppresses_shortcuts() {
        let now = Instant::now();
        let mut player = ready_player();
        player.toggle_speed_menu();
        let outcome = player.handle_key(Key::Space, FocusTarget::TextArea, now);
        assert_eq!(outcome, KeyOutcome::Ignored);
        let snap = player.snapshot();
        assert!(!snap.is_playing);
        assert!(snap.speed_menu_open);
    }

    #[test]
    fn any_key_closes_menus() {
        let now = Instant::now();
        let mut player = ready_player();
        player.toggle_quality_menu();
        assert_eq!(
            player.handle_key(Key::Char('x'), FocusTarget::Page, now),
            KeyOutcome::Unbound
        );
        assert!(!player.snapshot().quality_menu_open);
    }

    #[test]
    fn keys_ignored_without_video_lesson() {
        let now = Instant::now();
        let mut player = player();
        player.load_lesson(&quiz(2, "Check"));
        assert_eq!(
            player.handle_key(Key::Space, FocusTarget::Page, now),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn key_in_fullscreen_playing_rearms_countdown() {
        let start = Instant::now();
        let mut player = ready_player();
        player.enter_fullscreen(start).unwrap();
        player.toggle_play(start);
        player.handle_key(Key::ArrowRight, FocusTarget::Page, start + Duration::from_secs(2));
        assert!(!player.tick(start + Duration::from_secs(4)));
        assert!(player.tick(start + Duration::from_secs(5)));
    }

    #[test]
    fn unmount_cancels_everything_once() {
        let start = Instant::now();
        let mut player = ready_player();
        player.enter_fullscreen(start).unwrap();
        player.toggle_play(start);
        player.scrub_press(20.0, BAR);

        player.unmount();
        player.unmount();

        assert!(player.controls_deadline().is_none());
        assert!(!player.tick(start + Duration::from_secs(30)));
        assert_eq!(count(&player, &MediaCommand::ReleasePointer), 1);
        assert_eq!(count(&player, &MediaCommand::ExitFullscreen), 1);
        assert_eq!(player.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn host_play_pause_events_sync_phase() {
        let now = Instant::now();
        let mut player = ready_player();
        player.on_play(now);
        assert!(player.snapshot().is_playing);
        player.on_pause();
        assert_eq!(player.phase(), PlaybackPhase::Paused);
    }

    #[test]
    fn settings_come_from_config() {
        let mut config = Config::default();
        config.video.volume = Some(0.5);
        config.video.muted = Some(true);
        config.video.playback_rate = Some(1.75);
        config.video.quality = Some("360p".to_string());
        config.fullscreen.overlay_timeout_secs = Some(5);

        let settings = PlayerSettings::from_config(&config);
        assert_abs_diff_eq!(settings.volume.value(), 0.5);
        assert!(settings.start_muted);
        assert_abs_diff_eq!(settings.playback_rate.value(), 1.75);
        assert_eq!(settings.quality, VideoQuality::P360);
        assert_eq!(settings.overlay_timeout.value(), 5);
    }
}
