//! Beam shower background effect.
//!
//! Twenty decorative curves animate in clustered bursts with bounded
//! concurrency. Schedules are computed once per mount from fresh entropy; a
//! single frame loop evaluates every beam's timeline against elapsed time,
//! so unmounting cancels one callback and removes one subtree.

use crate::constants::{
    BEAM_GRADIENT_ID, BEAM_GRADIENT_STOPS, BEAM_HOST_ID, BEAM_STROKE_WIDTH,
    BEAM_UNDERLAY_OPACITY, BEAM_UNDERLAY_STROKE, BEAM_UNDERLAY_STROKE_WIDTH, DEFAULT_MAX_ACTIVE,
    MAX_ACTIVE_ATTR,
};
use crate::core::geometry::{beam_path, NUM_BEAMS, VIEW_BOX};
use crate::core::rng::UnitRng;
use crate::core::scheduler::{clamp_max_active, schedule_shower, BeamSchedule, ShowerParams};
use crate::core::timeline::eval_beam;
use crate::dom;
use crate::frame;
use anyhow::anyhow;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct BeamState {
    path: web::SvgGeometryElement,
    length: f64,
    schedule: BeamSchedule,
}

pub struct BeamsHandle {
    pump: Rc<RefCell<frame::Pump>>,
    svg: web::Element,
    torn_down: bool,
}

impl BeamsHandle {
    /// Stop the frame loop and remove the generated SVG. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        frame::stop(&self.pump);
        self.svg.remove();
        log::info!("[beams] torn down");
    }
}

impl Drop for BeamsHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Mount the beam shower onto its host element.
///
/// A missing host disables the effect silently; it is decorative. Errors are
/// reserved for a broken document (element construction failing).
pub fn mount(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Option<BeamsHandle>> {
    let Some(host) = document.get_element_by_id(BEAM_HOST_ID) else {
        log::warn!("[beams] host #{BEAM_HOST_ID} missing; effect disabled");
        return Ok(None);
    };

    let raw_max = dom::attr_f64(&host, MAX_ACTIVE_ATTR).unwrap_or(DEFAULT_MAX_ACTIVE);
    let max_active = clamp_max_active(raw_max);

    let svg = build_svg(document)?;
    host.append_child(&svg)
        .map_err(|e| anyhow!("attach svg: {e:?}"))?;

    let mut rng = UnitRng(StdRng::from_entropy());
    let params = ShowerParams {
        max_active,
        ..ShowerParams::default()
    };
    let schedules = schedule_shower(NUM_BEAMS, &params, &mut rng);

    let mut beams = Vec::with_capacity(NUM_BEAMS);
    for (i, schedule) in schedules.into_iter().enumerate() {
        beams.push(build_beam(document, &svg, i, schedule)?);
    }

    let started = Instant::now();
    let pump = frame::start_loop(window.clone(), move || {
        let elapsed = started.elapsed().as_secs_f64();
        for beam in &beams {
            let stroke = eval_beam(&beam.schedule, beam.length, elapsed);
            _ = beam
                .path
                .set_attribute("stroke-dashoffset", &format!("{:.2}", stroke.dash_offset));
            _ = beam
                .path
                .set_attribute("stroke-opacity", &format!("{:.3}", stroke.opacity));
        }
    });

    log::info!("[beams] mounted {NUM_BEAMS} beams, max_active={max_active}");
    Ok(Some(BeamsHandle {
        pump,
        svg,
        torn_down: false,
    }))
}

fn build_svg(document: &web::Document) -> anyhow::Result<web::Element> {
    let svg = dom::create_svg_element(document, "svg")?;
    set_attrs(
        &svg,
        &[
            ("viewBox", VIEW_BOX),
            ("fill", "none"),
            ("preserveAspectRatio", "xMidYMid slice"),
            ("width", "100%"),
            ("height", "100%"),
            ("aria-hidden", "true"),
        ],
    )?;

    // Shared gradient for every animated stroke.
    let defs = dom::create_svg_element(document, "defs")?;
    let gradient = dom::create_svg_element(document, "linearGradient")?;
    set_attrs(
        &gradient,
        &[
            ("id", BEAM_GRADIENT_ID),
            ("x1", "0%"),
            ("y1", "0%"),
            ("x2", "100%"),
            ("y2", "100%"),
        ],
    )?;
    for &(offset, color, opacity) in BEAM_GRADIENT_STOPS {
        let stop = dom::create_svg_element(document, "stop")?;
        set_attrs(
            &stop,
            &[
                ("offset", offset),
                ("stop-color", color),
                ("stop-opacity", opacity),
            ],
        )?;
        gradient
            .append_child(&stop)
            .map_err(|e| anyhow!("attach stop: {e:?}"))?;
    }
    defs.append_child(&gradient)
        .map_err(|e| anyhow!("attach gradient: {e:?}"))?;
    svg.append_child(&defs)
        .map_err(|e| anyhow!("attach defs: {e:?}"))?;

    // Static faint copies of every path for depth.
    let underlay = dom::create_svg_element(document, "g")?;
    underlay
        .set_attribute("opacity", BEAM_UNDERLAY_OPACITY)
        .map_err(|e| anyhow!("set underlay opacity: {e:?}"))?;
    for i in 0..NUM_BEAMS {
        let path = dom::create_svg_element(document, "path")?;
        set_attrs(
            &path,
            &[
                ("d", &beam_path(i)),
                ("stroke", BEAM_UNDERLAY_STROKE),
                ("stroke-width", BEAM_UNDERLAY_STROKE_WIDTH),
            ],
        )?;
        underlay
            .append_child(&path)
            .map_err(|e| anyhow!("attach underlay path: {e:?}"))?;
    }
    svg.append_child(&underlay)
        .map_err(|e| anyhow!("attach underlay: {e:?}"))?;

    Ok(svg)
}

fn build_beam(
    document: &web::Document,
    svg: &web::Element,
    index: usize,
    schedule: BeamSchedule,
) -> anyhow::Result<BeamState> {
    let el = dom::create_svg_element(document, "path")?;
    let gradient_ref = format!("url(#{BEAM_GRADIENT_ID})");
    set_attrs(
        &el,
        &[
            ("d", &beam_path(index)),
            ("stroke", &gradient_ref),
            ("stroke-width", BEAM_STROKE_WIDTH),
            ("stroke-linecap", "round"),
            ("fill", "none"),
        ],
    )?;
    svg.append_child(&el)
        .map_err(|e| anyhow!("attach beam path: {e:?}"))?;

    let path: web::SvgGeometryElement = el
        .dyn_into()
        .map_err(|_| anyhow!("beam path is not a geometry element"))?;
    let length = path.get_total_length() as f64;

    // Park the stroke at its initial progress, invisible, until the first
    // cycle. The frame loop takes over from here.
    let initial = eval_beam(&schedule, length, 0.0);
    set_attrs(
        &path,
        &[
            ("stroke-dasharray", &format!("{length:.2}")),
            ("stroke-dashoffset", &format!("{:.2}", initial.dash_offset)),
            ("stroke-opacity", "0"),
        ],
    )?;

    Ok(BeamState {
        path,
        length,
        schedule,
    })
}

fn set_attrs(el: &web::Element, attrs: &[(&str, &str)]) -> anyhow::Result<()> {
    for (name, value) in attrs {
        el.set_attribute(name, value)
            .map_err(|e| anyhow!("set {name}: {e:?}"))?;
    }
    Ok(())
}
