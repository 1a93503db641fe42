//! Sound cues
//!
//! Procedurally generated with Web Audio oscillators on wasm32, so no sound
//! files are needed. Natively the cues are only logged. Playback is
//! fire-and-forget; nothing here ever blocks the frame.

use crate::settings::Settings;
use crate::sim::GameEvent;

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Run started (swoosh)
    Start,
    /// Bird flapped
    Flap,
    /// Bird struck a pipe
    Hit,
    /// Bird struck the ground or ceiling
    Die,
    /// Pipe passed
    Point,
}

impl Cue {
    /// Cue that accompanies a simulation event
    pub fn for_event(event: &GameEvent) -> Cue {
        match event {
            GameEvent::Started => Cue::Start,
            GameEvent::Flapped => Cue::Flap,
            GameEvent::Hit => Cue::Hit,
            GameEvent::Died => Cue::Die,
            GameEvent::Scored { .. } => Cue::Point,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        #[cfg(target_arch = "wasm32")]
        let ctx = {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            ctx
        };
        Self {
            #[cfg(target_arch = "wasm32")]
            ctx,
            volume: settings.effective_volume(),
        }
    }

    /// Re-read volume and mute from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Play the cue for each event
    pub fn play_events(&self, events: &[GameEvent]) {
        for event in events {
            self.play(Cue::for_event(event));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn play(&self, cue: Cue) {
        if self.volume > 0.0 {
            log::debug!("cue {:?} (volume {:.2})", cue, self.volume);
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn play(&self, cue: Cue) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        if self.volume <= 0.0 {
            return;
        }
        let vol = self.volume;

        match cue {
            Cue::Start => self.play_swoosh(ctx, vol),
            Cue::Flap => self.play_flap(ctx, vol),
            Cue::Hit => self.play_hit(ctx, vol),
            Cue::Die => self.play_die(ctx, vol),
            Cue::Point => self.play_point(ctx, vol),
        }
    }

    /// Resume audio context (required after user gesture)
    #[cfg(target_arch = "wasm32")]
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Swoosh - rising sweep
    #[cfg(target_arch = "wasm32")]
    fn play_swoosh(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.2)
            .ok();
        osc.frequency().set_value_at_time(200.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(600.0, t + 0.15)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.25).ok();
    }

    /// Flap - short chirp
    #[cfg(target_arch = "wasm32")]
    fn play_flap(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 500.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.25, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.06)
            .ok();
        osc.frequency().set_value_at_time(500.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(900.0, t + 0.05)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.08).ok();
    }

    /// Hit - solid thump
    #[cfg(target_arch = "wasm32")]
    fn play_hit(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.5, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.12)
            .ok();
        osc.frequency().set_value_at_time(150.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(60.0, t + 0.1)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.15).ok();
    }

    /// Die - sad descending
    #[cfg(target_arch = "wasm32")]
    fn play_die(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [400.0, 300.0, 200.0].iter().enumerate() {
            let delay = i as f64 * 0.15;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.3).ok();
            }
        }
    }

    /// Point - two-note ding
    #[cfg(target_arch = "wasm32")]
    fn play_point(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [800.0, 1200.0].iter().enumerate() {
            let delay = i as f64 * 0.08;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.25, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.25).ok();
            }
        }
    }
}
