use crate::catalog::{VideoItem, GALLERY_VIDEOS};
use crate::constants::TURNTABLE_FRAME_COUNT;
use crate::controller::{ViewerConfig, ViewerController};
use crate::dom;
use crate::events::{self, ViewerWiring};
use crate::media;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mount one card per catalog entry under the gallery root. Each card owns
/// its own controller behind its own `Rc<RefCell<…>>`; gallery items share
/// nothing mutable.
pub fn mount(document: &web::Document, root: &web::Element) -> anyhow::Result<()> {
    for item in GALLERY_VIDEOS {
        mount_item(document, root, item)?;
    }
    log::info!("[gallery] mounted {} viewers", GALLERY_VIDEOS.len());
    Ok(())
}

fn mount_item(
    document: &web::Document,
    root: &web::Element,
    item: &VideoItem,
) -> anyhow::Result<()> {
    let config = ViewerConfig::new(
        format!("/{}", item.name),
        TURNTABLE_FRAME_COUNT,
        item.duration_seconds,
    )?;

    let card: web::HtmlElement = dom::create_element(document, "div")?;
    card.set_class_name("viewer-card");

    let header: web::HtmlElement = dom::create_element(document, "div")?;
    header.set_class_name("viewer-label");
    header.set_text_content(Some(&item.display_label()));

    // The stage receives the pointer handlers and is what goes fullscreen;
    // the video underneath it never sees events directly.
    let stage: web::HtmlElement = dom::create_element(document, "div")?;
    stage.set_class_name("viewer-stage");

    let video: web::HtmlVideoElement = dom::create_element(document, "video")?;
    video.set_class_name("viewer-video");
    media::configure_for_scrubbing(&video, config.source_path());

    let fullscreen_button: web::HtmlElement = dom::create_element(document, "button")?;
    fullscreen_button.set_class_name("viewer-fullscreen");
    _ = fullscreen_button.set_attribute("type", "button");
    _ = fullscreen_button.set_attribute("aria-label", "Toggle fullscreen");

    stage
        .append_child(&video)
        .map_err(|e| anyhow!("attach video: {e:?}"))?;
    stage
        .append_child(&fullscreen_button)
        .map_err(|e| anyhow!("attach fullscreen button: {e:?}"))?;
    card.append_child(&header)
        .map_err(|e| anyhow!("attach header: {e:?}"))?;
    card.append_child(&stage)
        .map_err(|e| anyhow!("attach stage: {e:?}"))?;
    root.append_child(&card)
        .map_err(|e| anyhow!("attach card: {e:?}"))?;

    let controller = Rc::new(RefCell::new(ViewerController::new(config)));

    // Initial mount sync: pause and park the element on frame 0 so the
    // displayed position matches the controller from the first paint.
    media::sync_to_frame(Some(&video), controller.borrow().seek_command());

    log::info!(
        "[gallery] viewer ready: {} ({} frames over {:.1}s)",
        item.name,
        controller.borrow().config().frame_count(),
        item.duration_seconds
    );

    events::wire_viewer_handlers(ViewerWiring {
        container: stage,
        video,
        fullscreen_button,
        controller,
    });

    Ok(())
}
