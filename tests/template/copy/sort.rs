use vectorish::{vector, Vector};

#[mockalloc::test]
fn sort_ascending_and_descending() {
    new_vec!(mut vec = [5, 2, 9, 1, 5, 6]);

    vec.sort(false);
    assert_eq!(vec, [1, 2, 5, 5, 6, 9]);

    vec.sort(true);
    assert_eq!(vec, [9, 6, 5, 5, 2, 1]);
}

#[mockalloc::test]
fn sort_by_key_is_stable() {
    let mut vec = vector![(1, 'a'), (1, 'b'), (0, 'c')];
    vec.sort_by_key(|&(key, _)| key, false);
    assert_eq!(vec, [(0, 'c'), (1, 'a'), (1, 'b')]);
}

#[mockalloc::test]
fn reverse_flips_the_stable_order() {
    let mut vec = vector![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
    vec.sort_by_key(|&(key, _)| key, true);
    assert_eq!(vec, [(1, 'c'), (1, 'a'), (0, 'd'), (0, 'b')]);
}

#[mockalloc::test]
fn key_runs_once_per_element() {
    new_vec!(mut vec = [3, 1, 2, 5, 4]);
    let mut calls = 0;
    vec.sort_by_key(
        |&x| {
            calls += 1;
            -x
        },
        false,
    );
    assert_eq!(calls, 5);
    assert_eq!(vec, [5, 4, 3, 2, 1]);
}

#[mockalloc::test]
fn sort_by_comparator() {
    new_vec!(mut vec = [-3, 1, -2, 4, 0]);
    vec.sort_by(|a, b| a.abs().cmp(&b.abs()), false);
    assert_eq!(vec, [0, 1, -2, -3, 4]);
}

#[mockalloc::test]
fn failing_key_leaves_the_vector_unchanged() {
    new_vec!(mut vec = [3, 1, -1, 2]);

    let result = vec.try_sort_by_key(|&x| if x < 0 { Err(x) } else { Ok(x) }, false);
    assert_eq!(result, Err(-1));
    assert_eq!(vec, [3, 1, -1, 2]);

    let result: Result<(), i32> = vec.try_sort_by_key(|&x| Ok(x.abs()), false);
    assert_eq!(result, Ok(()));
    assert_eq!(vec, [1, -1, 2, 3]);
}

#[mockalloc::test]
fn sorting_trivial_vectors() {
    let mut empty: Vector<i32> = Vector::new();
    empty.sort(false);
    assert!(empty.is_empty());

    new_vec!(mut one = [7]);
    one.sort(true);
    assert_eq!(one, [7]);
}
