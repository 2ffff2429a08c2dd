use crate::constants::*;
use kinetic_core::SpectrumSource;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Analyser graph built lazily on the first `play()`, since browsers only
/// allow an `AudioContext` to run after a user gesture.
struct Graph {
    audio_ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    // kept alive for the lifetime of the graph
    _source: web::MediaElementAudioSourceNode,
}

/// Media element playback feeding an analyser.
#[derive(Clone)]
pub struct AudioPlayback {
    media: web::HtmlMediaElement,
    graph: Rc<RefCell<Option<Graph>>>,
}

impl AudioPlayback {
    pub fn new(media: web::HtmlMediaElement) -> Self {
        Self {
            media,
            graph: Rc::new(RefCell::new(None)),
        }
    }

    /// Spectrum reader sharing this playback's analyser. Yields nothing until
    /// `play()` has built the graph.
    pub fn spectrum(&self) -> AnalyserSpectrum {
        AnalyserSpectrum {
            graph: self.graph.clone(),
        }
    }

    pub async fn play(&self) -> anyhow::Result<()> {
        if self.graph.borrow().is_none() {
            let graph = build_graph(&self.media)?;
            *self.graph.borrow_mut() = Some(graph);
        }
        let resume = match self.graph.borrow().as_ref() {
            Some(g) => g.audio_ctx.resume(),
            None => return Err(anyhow::anyhow!("audio graph missing")),
        }
        .map_err(|e| anyhow::anyhow!("AudioContext resume error: {:?}", e))?;
        JsFuture::from(resume)
            .await
            .map_err(|e| anyhow::anyhow!("AudioContext resume rejected: {:?}", e))?;

        let started = self
            .media
            .play()
            .map_err(|e| anyhow::anyhow!("media play error: {:?}", e))?;
        JsFuture::from(started)
            .await
            .map_err(|e| anyhow::anyhow!("media play rejected: {:?}", e))?;
        log::info!("[audio] playback started");
        Ok(())
    }

    pub fn pause(&self) {
        _ = self.media.pause();
    }

    pub fn close(&self) {
        if let Some(g) = self.graph.borrow_mut().take() {
            _ = g.audio_ctx.close();
        }
    }
}

fn build_graph(media: &web::HtmlMediaElement) -> anyhow::Result<Graph> {
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let source = audio_ctx
        .create_media_element_source(media)
        .map_err(|e| anyhow::anyhow!("MediaElementAudioSourceNode error: {:?}", e))?;
    let analyser = create_analyser(&audio_ctx)?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("connect source error: {:?}", e))?;
    analyser
        .connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| anyhow::anyhow!("connect analyser error: {:?}", e))?;
    log::info!(
        "[audio] analyser ready: {} bins",
        analyser.frequency_bin_count()
    );
    Ok(Graph {
        audio_ctx,
        analyser,
        _source: source,
    })
}

fn create_analyser(audio_ctx: &web::AudioContext) -> anyhow::Result<web::AnalyserNode> {
    let analyser =
        web::AnalyserNode::new(audio_ctx).map_err(|e| anyhow::anyhow!("AnalyserNode error: {:?}", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    analyser.set_smoothing_time_constant(ANALYSER_SMOOTHING);
    analyser.set_min_decibels(ANALYSER_MIN_DB);
    analyser.set_max_decibels(ANALYSER_MAX_DB);
    Ok(analyser)
}

pub struct AnalyserSpectrum {
    graph: Rc<RefCell<Option<Graph>>>,
}

impl SpectrumSource for AnalyserSpectrum {
    fn refresh(&mut self, bins: &mut Vec<u8>) -> bool {
        let graph = self.graph.borrow();
        let Some(g) = graph.as_ref() else {
            return false;
        };
        let n = g.analyser.frequency_bin_count() as usize;
        if bins.len() != n {
            bins.resize(n, 0);
        }
        g.analyser.get_byte_frequency_data(bins.as_mut_slice());
        true
    }
}
