//! WebAudio implementation of the renderer capability.
//!
//! One `AudioContext` per engine lifetime; each source is a looping
//! `HtmlAudioElement` routed `MediaElementAudioSourceNode -> PannerNode ->
//! destination`, with HRTF panning and linear distance attenuation.

use glam::Vec3;
use soundscape_core::{
    AudioHandle, ConeParams, SoundscapeError, SpatialHandle, SpatialParams, SpatialRenderer,
};
use web_sys as web;

pub struct WebRenderer {
    ctx: Option<web::AudioContext>,
}

impl WebRenderer {
    pub fn new() -> Self {
        Self { ctx: None }
    }

    fn ctx(&self) -> Result<&web::AudioContext, SoundscapeError> {
        self.ctx.as_ref().ok_or_else(|| {
            SoundscapeError::RendererUnavailable("audio context not initialized".into())
        })
    }
}

impl Default for WebRenderer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WebAudio {
    element: web::HtmlAudioElement,
}

impl AudioHandle for WebAudio {
    fn play(&mut self) {
        _ = self.element.play();
    }

    fn pause(&mut self) {
        _ = self.element.pause();
    }

    fn set_volume(&mut self, volume: f32) {
        self.element.set_volume(volume as f64);
    }

    fn set_playback_rate(&mut self, rate: f32) {
        self.element.set_playback_rate(rate as f64);
    }

    fn set_source(&mut self, url: &str) -> Result<(), SoundscapeError> {
        self.element.set_src(url);
        Ok(())
    }

    fn release(&mut self) {
        _ = self.element.pause();
        self.element.remove();
    }
}

pub struct WebSpatial {
    panner: web::PannerNode,
    track: web::MediaElementAudioSourceNode,
}

impl SpatialHandle for WebSpatial {
    fn set_position(&mut self, position: Vec3) {
        self.panner.position_x().set_value(position.x);
        self.panner.position_y().set_value(position.y);
        self.panner.position_z().set_value(position.z);
    }

    fn set_cone(&mut self, cone: ConeParams) {
        self.panner.set_cone_inner_angle(cone.inner_angle as f64);
        self.panner.set_cone_outer_angle(cone.outer_angle as f64);
        self.panner.set_cone_outer_gain(cone.outer_gain as f64);
    }

    fn release(&mut self) {
        self.track.disconnect().ok();
        self.panner.disconnect().ok();
    }
}

impl SpatialRenderer for WebRenderer {
    type Audio = WebAudio;
    type Spatial = WebSpatial;

    fn initialize(&mut self) -> Result<(), SoundscapeError> {
        // The engine rejects double-start; if a context is somehow still
        // around, close it before creating the next one.
        if let Some(old) = self.ctx.take() {
            _ = old.close();
        }
        let ctx = web::AudioContext::new()
            .map_err(|e| SoundscapeError::RendererUnavailable(format!("{e:?}")))?;
        _ = ctx.resume();
        self.ctx = Some(ctx);
        Ok(())
    }

    fn set_listener_position(&mut self, position: Vec3) {
        if let Ok(ctx) = self.ctx() {
            ctx.listener()
                .set_position(position.x as f64, position.y as f64, position.z as f64);
        }
    }

    fn create_audio(&mut self, url: &str) -> Result<WebAudio, SoundscapeError> {
        let element = web::HtmlAudioElement::new_with_src(url).map_err(|_| {
            SoundscapeError::AssetUnavailable {
                url: url.to_string(),
            }
        })?;
        element.set_loop(true);
        Ok(WebAudio { element })
    }

    fn bind_spatial(
        &mut self,
        audio: &WebAudio,
        position: Vec3,
        params: &SpatialParams,
    ) -> Result<WebSpatial, SoundscapeError> {
        let ctx = self.ctx()?;
        let panner = web::PannerNode::new(ctx)
            .map_err(|e| SoundscapeError::RendererUnavailable(format!("PannerNode: {e:?}")))?;
        panner.set_panning_model(web::PanningModelType::Hrtf);
        panner.set_distance_model(web::DistanceModelType::Linear);
        panner.set_ref_distance(params.ref_distance as f64);
        panner.set_max_distance(params.max_distance as f64);
        panner.set_rolloff_factor(params.rolloff_factor as f64);
        panner.set_cone_inner_angle(params.cone.inner_angle as f64);
        panner.set_cone_outer_angle(params.cone.outer_angle as f64);
        panner.set_cone_outer_gain(params.cone.outer_gain as f64);
        panner.position_x().set_value(position.x);
        panner.position_y().set_value(position.y);
        panner.position_z().set_value(position.z);
        panner.orientation_z().set_value(-1.0);

        let track = ctx
            .create_media_element_source(&audio.element)
            .map_err(|e| SoundscapeError::RendererUnavailable(format!("media source: {e:?}")))?;
        _ = track.connect_with_audio_node(&panner);
        _ = panner.connect_with_audio_node(&ctx.destination());
        Ok(WebSpatial { panner, track })
    }
}
