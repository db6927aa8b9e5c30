use std::fs::File;
use std::path::Path;

use image::{GrayImage, Luma};
use maskbench::error::EvalError;
use maskbench::stack::{ImageStack, load_stack, write_stack_tiff};
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32, value: u8) {
    let img = GrayImage::from_pixel(width, height, Luma([value]));
    img.save(dir.join(name)).unwrap();
}

#[test]
fn load_orders_frames_by_file_name() {
    let tmp = TempDir::new().unwrap();
    write_png(tmp.path(), "b.png", 2, 2, 255);
    write_png(tmp.path(), "a.png", 2, 2, 0);

    let stack = load_stack(tmp.path(), "png").unwrap();
    assert_eq!(stack.frames(), 2);
    assert!(stack.frame(0).iter().all(|&v| v == 0.0));
    assert!(stack.frame(1).iter().all(|&v| v == 255.0));
}

#[test]
fn load_ignores_other_extensions() {
    let tmp = TempDir::new().unwrap();
    write_png(tmp.path(), "a.png", 2, 2, 128);
    std::fs::write(tmp.path().join("notes.txt"), "not an image").unwrap();

    let stack = load_stack(tmp.path(), "png").unwrap();
    assert_eq!(stack.frames(), 1);
}

#[test]
fn empty_directory_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_stack(tmp.path(), "png").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EvalError>(),
        Some(EvalError::EmptyInput { .. })
    ));
}

#[test]
fn missing_directory_is_an_error() {
    let err = load_stack(Path::new("/nonexistent/masks"), "png").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EvalError>(),
        Some(EvalError::InputNotFound(_))
    ));
}

#[test]
fn mismatched_frame_shape_is_an_error() {
    let tmp = TempDir::new().unwrap();
    write_png(tmp.path(), "a.png", 2, 2, 255);
    write_png(tmp.path(), "b.png", 3, 2, 255);

    let err = load_stack(tmp.path(), "png").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EvalError>(),
        Some(EvalError::ShapeMismatch { .. })
    ));
}

#[test]
fn normalize_rescales_into_unit_range_and_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    write_png(tmp.path(), "a.png", 2, 2, 255);
    write_png(tmp.path(), "b.png", 2, 2, 51);

    let mut stack = load_stack(tmp.path(), "png").unwrap();
    stack.normalize();
    assert!(stack.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
    assert_eq!(stack.frame(0)[0], 1.0);
    assert_eq!(stack.frame(1)[0], 0.2);

    let once = stack.clone();
    stack.normalize();
    assert_eq!(stack, once);
}

#[test]
fn normalize_leaves_unit_range_stacks_untouched() {
    let mut stack = ImageStack::new(1, 1, 2, vec![0.25, 1.0]).unwrap();
    stack.normalize();
    assert_eq!(stack.data(), &[0.25, 1.0]);
}

#[test]
fn duplicate_doubles_frames_with_identical_first_half() {
    let stack = ImageStack::new(2, 1, 2, vec![0.0, 0.25, 0.5, 1.0]).unwrap();
    let doubled = stack.duplicate();
    assert_eq!(doubled.frames(), 4);
    assert_eq!(&doubled.data()[..stack.len()], stack.data());
    assert_eq!(&doubled.data()[stack.len()..], stack.data());
}

#[test]
fn binarize_thresholds_at_half() {
    let stack = ImageStack::new(1, 1, 4, vec![0.0, 0.5, 0.51, 1.0]).unwrap();
    assert_eq!(stack.binarize(), vec![0, 0, 1, 1]);
}

#[test]
fn staged_tiff_carries_one_page_per_frame() {
    let tmp = TempDir::new().unwrap();
    let stack = ImageStack::new(2, 2, 2, vec![0.0; 8]).unwrap();
    let path = tmp.path().join("Ground.tif");
    write_stack_tiff(&stack.duplicate(), &path).unwrap();

    let mut decoder = tiff::decoder::Decoder::new(File::open(&path).unwrap()).unwrap();
    assert_eq!(decoder.dimensions().unwrap(), (2, 2));
    let mut pages = 1;
    while decoder.more_images() {
        decoder.next_image().unwrap();
        pages += 1;
    }
    assert_eq!(pages, 4);
}
