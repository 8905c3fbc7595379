//! Cursor-reactive page background.
//!
//! Pointer and touch moves go through a [`FrameScheduler`], so a burst of
//! events inside one frame repaints once with the latest position. The
//! backdrop is also the page's scroll container and reports its scroll
//! offset upward for the floating contact button.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use teeshop_core::{paint, FrameScheduler, Point, Viewport};

use crate::theme::colors::SLATE_DARK;

/// One display frame at 60 Hz
const FRAME: Duration = Duration::from_millis(16);

/// Window size before the first layout measurement
const INITIAL_VIEWPORT: Viewport = Viewport::new(1100.0, 900.0);

/// Full-window scroll container painted with the pointer gradient.
///
/// # Props
///
/// * `on_scroll` - Called with the vertical scroll offset in pixels
/// * `children` - Page content
#[component]
pub fn GradientBackdrop(on_scroll: EventHandler<f64>, children: Element) -> Element {
    let mut viewport = use_signal(|| INITIAL_VIEWPORT);
    let mut scheduler = use_signal(|| FrameScheduler::new(INITIAL_VIEWPORT.center()));
    let mut gradient = use_signal(|| paint(INITIAL_VIEWPORT.center(), INITIAL_VIEWPORT));
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let mut schedule = move |point: Point| {
        if scheduler.write().schedule(point) {
            spawn(async move {
                tokio::time::sleep(FRAME).await;
                if let Some(latest) = scheduler.write().take_frame() {
                    gradient.set(paint(latest, viewport()));
                }
            });
        }
    };

    // Resize repaints immediately at the last known pointer position
    let mut resize = move |width: f64, height: f64| {
        let vp = Viewport::new(width, height);
        if vp != *viewport.peek() {
            tracing::trace!(width, height, "Viewport resized");
            viewport.set(vp);
            gradient.set(paint(scheduler.peek().latest(), vp));
        }
    };

    let on_mounted = move |e: MountedEvent| {
        let data = e.data();
        mounted.set(Some(data.clone()));
        spawn(async move {
            if let Ok(rect) = data.get_client_rect().await {
                let vp = Viewport::new(rect.size.width, rect.size.height);
                // Centered in the measured window unless the pointer already moved
                let point = scheduler.write().reseed(vp.center());
                viewport.set(vp);
                gradient.set(paint(point, vp));
            }
        });
    };

    let on_scroll_event = move |_| {
        if let Some(data) = mounted() {
            spawn(async move {
                if let Ok(offset) = data.get_scroll_offset().await {
                    on_scroll.call(offset.y);
                }
            });
        }
    };

    rsx! {
        div {
            class: "page-scroll",
            style: "background-color: {SLATE_DARK}; background-image: {gradient};",
            onmounted: on_mounted,
            onscroll: on_scroll_event,
            onresize: move |e: ResizeEvent| {
                if let Ok(size) = e.get_border_box_size() {
                    resize(size.width, size.height);
                }
            },
            onmousemove: move |e: MouseEvent| {
                let p = e.client_coordinates();
                schedule(Point::new(p.x, p.y));
            },
            ontouchmove: move |e: TouchEvent| {
                if let Some(touch) = e.touches().first() {
                    let p = touch.client_coordinates();
                    schedule(Point::new(p.x, p.y));
                }
            },
            {children}
        }
    }
}
