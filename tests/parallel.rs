mod common;

use common::bmp_builder::gradient_bmp;

use bmpfx::codec::{decode_bmp, encode_bmp};
use bmpfx::parallel::ParallelOptions;
use bmpfx::{apply_transform, Transform};

fn run_with(bytes: &[u8], transform: Transform, options: ParallelOptions) -> Vec<u8> {
    let mut image = decode_bmp(bytes).expect("fixture decodes");
    apply_transform(&mut image, transform, options).expect("transform runs");
    encode_bmp(&image).expect("encode")
}

#[test]
fn output_is_independent_of_worker_count() {
    let bytes = gradient_bmp(33, 17);
    for transform in [
        Transform::Grayscale,
        Transform::BoxBlur { size: 3 },
        Transform::BoxBlur { size: 5 },
    ] {
        let one = run_with(&bytes, transform, ParallelOptions::new(1).with_min_rows(1));
        let eight = run_with(&bytes, transform, ParallelOptions::new(8).with_min_rows(1));
        assert_eq!(one, eight, "{transform:?} output differs across worker counts");
    }
}

#[test]
fn parallel_path_matches_sequential_path() {
    let bytes = gradient_bmp(21, 40);
    for transform in [Transform::Grayscale, Transform::BoxBlur { size: 7 }] {
        let sequential = run_with(&bytes, transform, ParallelOptions::disabled());
        let parallel = run_with(&bytes, transform, ParallelOptions::new(8).with_min_rows(1));
        assert_eq!(
            sequential, parallel,
            "{transform:?} parallel output diverges from sequential"
        );
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let bytes = gradient_bmp(19, 35);
    let options = ParallelOptions::new(6).with_min_rows(1);
    let first = run_with(&bytes, Transform::BoxBlur { size: 9 }, options);
    for _ in 0..3 {
        assert_eq!(run_with(&bytes, Transform::BoxBlur { size: 9 }, options), first);
    }
}
