use rand::{rngs::StdRng, Rng, SeedableRng};
use vectorish::{Error, Vector};

#[mockalloc::test]
fn slice_with_default_step() {
    new_vec!(mut vec);
    vec.extend(0..6);

    assert_eq!(vec.slice(None, None), [0, 1, 2, 3, 4, 5]);
    assert_eq!(vec.slice(Some(1), Some(4)), [1, 2, 3]);
    assert_eq!(vec.slice(Some(-2), None), [4, 5]);
    assert_eq!(vec.slice(None, Some(-4)), [0, 1]);
    assert_eq!(vec.slice(Some(-100), Some(2)), [0, 1]);
    assert_eq!(vec.slice(Some(4), Some(100)), [4, 5]);
}

#[mockalloc::test]
fn empty_ranges_are_not_errors() {
    new_vec!(mut vec);
    vec.extend(0..6);

    assert!(vec.slice(Some(4), Some(2)).is_empty());
    assert!(vec.slice(Some(6), None).is_empty());
    assert!(vec.slice(Some(100), Some(200)).is_empty());
    assert!(vec.slice(Some(-100), Some(-50)).is_empty());
    assert!(vec.slice(Some(-1), Some(-1)).is_empty());

    new_vec!(empty = []);
    assert!(empty.slice(Some(-1), Some(1)).is_empty());
    assert!(empty.slice_step(None, None, -1).unwrap().is_empty());
}

#[mockalloc::test]
fn stepped_slices() {
    new_vec!(mut vec);
    vec.extend(0..10);

    assert_eq!(vec.slice_step(None, None, 3), Ok(Vector::from([0, 3, 6, 9])));
    assert_eq!(vec.slice_step(Some(1), Some(8), 2), Ok(Vector::from([1, 3, 5, 7])));
    assert_eq!(vec.slice_step(None, None, -1), Ok(Vector::from([9, 8, 7, 6, 5, 4, 3, 2, 1, 0])));
    assert_eq!(vec.slice_step(Some(-2), Some(2), -3), Ok(Vector::from([8, 5])));
    assert_eq!(vec.slice_step(Some(2), None, -1), Ok(Vector::from([2, 1, 0])));
    assert_eq!(vec.slice_step(Some(100), Some(-100), -4), Ok(Vector::from([9, 5, 1])));
    assert!(vec.slice_step(Some(2), Some(8), -1).unwrap().is_empty());
}

#[mockalloc::test]
fn zero_step_is_rejected() {
    new_vec!(vec = [1, 2, 3]);
    assert!(matches!(vec.slice_step(None, None, 0), Err(Error::InvalidArgument(_))));
}

#[mockalloc::test]
fn slices_are_independent_copies() {
    new_vec!(mut vec = [1, 2, 3, 4]);
    let mut part = vec.slice(Some(1), Some(3));

    part.set(0, 20).unwrap();
    part.append(5);
    vec.set(2, 30).unwrap();

    assert_eq!(vec, [1, 2, 30, 4]);
    assert_eq!(part, [20, 3, 5]);
}

fn bound(rng: &mut StdRng) -> Option<isize> {
    match rng.gen_range(0..8) {
        0 => None,
        1 => Some(isize::MIN),
        2 => Some(isize::MAX),
        _ => Some(rng.gen_range(-40..40)),
    }
}

#[test]
fn random_bounds_never_fail() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..2000 {
        let len = rng.gen_range(0..20);
        let vec: Vector<usize> = (0..len).collect();
        let (start, stop) = (bound(&mut rng), bound(&mut rng));
        let step = loop {
            let step = rng.gen_range(-5..6);
            if step != 0 {
                break step;
            }
        };

        let part = vec.slice_step(start, stop, step).unwrap();
        assert!(part.len() <= len);

        // selected slots move monotonically in the direction of `step`
        for pair in part.as_slice().windows(2) {
            let gap = pair[1] as isize - pair[0] as isize;
            assert_eq!(gap, step, "{:?}:{:?}:{} of {}", start, stop, step, len);
        }

        if step == 1 {
            assert_eq!(vec.slice(start, stop), part);
        }
    }
}
