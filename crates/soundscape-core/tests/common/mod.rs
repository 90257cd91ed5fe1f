// Synthetic surface and renderer shared by the integration tests. Handle
// state is held behind Rc so tests can keep inspecting sources after they
// move into the engine.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use glam::{Vec2, Vec3};
use soundscape_core::{
    AudioHandle, ConeParams, Rect, SoundScaper, SoundscapeError, SpatialHandle, SpatialParams,
    SpatialRenderer, TargetSurface,
};

#[derive(Debug, Default)]
pub struct AudioState {
    pub url: String,
    pub volume: f32,
    pub rate: f32,
    pub play_calls: usize,
    pub playing: bool,
    pub released: bool,
}

#[derive(Debug, Default)]
pub struct SpatialState {
    pub position: Vec3,
    pub position_writes: usize,
    pub cone_writes: usize,
    pub released: bool,
}

pub struct MockAudio {
    pub state: Rc<RefCell<AudioState>>,
}

impl AudioHandle for MockAudio {
    fn play(&mut self) {
        let mut s = self.state.borrow_mut();
        s.playing = true;
        s.play_calls += 1;
    }

    fn pause(&mut self) {
        self.state.borrow_mut().playing = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.state.borrow_mut().volume = volume;
    }

    fn set_playback_rate(&mut self, rate: f32) {
        self.state.borrow_mut().rate = rate;
    }

    fn set_source(&mut self, url: &str) -> Result<(), SoundscapeError> {
        self.state.borrow_mut().url = url.to_string();
        Ok(())
    }

    fn release(&mut self) {
        self.state.borrow_mut().released = true;
    }
}

pub struct MockSpatial {
    pub state: Rc<RefCell<SpatialState>>,
}

impl SpatialHandle for MockSpatial {
    fn set_position(&mut self, position: Vec3) {
        let mut s = self.state.borrow_mut();
        s.position = position;
        s.position_writes += 1;
    }

    fn set_cone(&mut self, _cone: ConeParams) {
        self.state.borrow_mut().cone_writes += 1;
    }

    fn release(&mut self) {
        self.state.borrow_mut().released = true;
    }
}

#[derive(Default)]
pub struct RendererLog {
    pub contexts: usize,
    pub listener: Option<Vec3>,
    pub audios: Vec<Rc<RefCell<AudioState>>>,
    pub spatials: Vec<Rc<RefCell<SpatialState>>>,
}

#[derive(Clone, Default)]
pub struct MockRenderer {
    pub log: Rc<RefCell<RendererLog>>,
    pub failing_urls: Rc<RefCell<HashSet<String>>>,
    pub fail_init: bool,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_url(&self, url: &str) {
        self.failing_urls.borrow_mut().insert(url.to_string());
    }
}

impl SpatialRenderer for MockRenderer {
    type Audio = MockAudio;
    type Spatial = MockSpatial;

    fn initialize(&mut self) -> Result<(), SoundscapeError> {
        if self.fail_init {
            return Err(SoundscapeError::RendererUnavailable("mock".into()));
        }
        self.log.borrow_mut().contexts += 1;
        Ok(())
    }

    fn set_listener_position(&mut self, position: Vec3) {
        self.log.borrow_mut().listener = Some(position);
    }

    fn create_audio(&mut self, url: &str) -> Result<MockAudio, SoundscapeError> {
        if self.failing_urls.borrow().contains(url) {
            return Err(SoundscapeError::AssetUnavailable {
                url: url.to_string(),
            });
        }
        let state = Rc::new(RefCell::new(AudioState {
            url: url.to_string(),
            rate: 1.0,
            ..Default::default()
        }));
        self.log.borrow_mut().audios.push(state.clone());
        Ok(MockAudio { state })
    }

    fn bind_spatial(
        &mut self,
        _audio: &MockAudio,
        position: Vec3,
        _params: &SpatialParams,
    ) -> Result<MockSpatial, SoundscapeError> {
        let state = Rc::new(RefCell::new(SpatialState {
            position,
            ..Default::default()
        }));
        self.log.borrow_mut().spatials.push(state.clone());
        Ok(MockSpatial { state })
    }
}

#[derive(Clone)]
pub struct MockSurface {
    pub rects: Rc<RefCell<HashMap<String, Rect>>>,
    pub screen_height: f32,
    pub viewport: Vec2,
}

impl MockSurface {
    pub fn new(screen_height: f32) -> Self {
        Self {
            rects: Rc::new(RefCell::new(HashMap::new())),
            screen_height,
            viewport: Vec2::new(800.0, 600.0),
        }
    }

    pub fn place(&self, id: &str, rect: Rect) {
        self.rects.borrow_mut().insert(id.to_string(), rect);
    }

    pub fn remove(&self, id: &str) {
        self.rects.borrow_mut().remove(id);
    }
}

impl TargetSurface for MockSurface {
    type Id = String;

    fn bounding_rect(&self, id: &String) -> Option<Rect> {
        self.rects.borrow().get(id).copied()
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn screen_height(&self) -> f32 {
        self.screen_height
    }
}

/// Engine over mocks, with handles to the surface and renderer log kept out
/// so tests can inspect and mutate them afterwards.
pub fn engine(screen_height: f32) -> (SoundScaper<MockSurface, MockRenderer>, MockSurface, MockRenderer) {
    let surface = MockSurface::new(screen_height);
    let renderer = MockRenderer::new();
    let engine = SoundScaper::new(surface.clone(), renderer.clone());
    (engine, surface, renderer)
}
