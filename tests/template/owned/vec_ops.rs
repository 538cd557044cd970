use vectorish::{Error, Vector};

#[mockalloc::test]
fn append_and_pop() {
    new_vec!(mut vec);

    vec.extend((0..8).map(|x| S!(x)));
    assert_eq!(vec, S!([0, 1, 2, 3, 4, 5, 6, 7]));

    assert_eq!(vec.pop(), Ok(S!(7)));
    assert_eq!(vec.pop_front(), Ok(S!(0)));
    assert_eq!(vec.pop_at(-2), Ok(S!(5)));
    assert_eq!(vec, S!([1, 2, 3, 4, 6]));
}

#[mockalloc::test]
fn insert_shifts_owned_values() {
    new_vec!(mut vec = ["b", "d"]);

    vec.insert(1, S!("c"));
    vec.append_left(S!("a"));
    vec.insert(100, S!("e"));
    assert_eq!(vec, S!(["a", "b", "c", "d", "e"]));
}

#[mockalloc::test]
fn set_returns_the_old_value() {
    new_vec!(mut vec = ["x", "y"]);

    assert_eq!(vec.set(-1, S!("z")), Ok(S!("y")));
    assert_eq!(vec.set(2, S!("w")), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(vec, S!(["x", "z"]));
}

#[mockalloc::test]
fn clear_drops_everything() {
    new_vec!(mut vec);
    vec.extend((0..100).map(|x| S!(x)));
    vec.clear();
    assert!(vec.is_empty());

    vec.append(S!("again"));
    assert_eq!(vec, S!(["again"]));
}

#[mockalloc::test]
fn dropping_a_full_vector_frees_everything() {
    new_vec!(mut vec);
    vec.extend((0..1000).map(|x| S!(x)));
    for _ in 0..10 {
        vec.pop_at(37).unwrap();
        vec.insert(-5, S!("inserted"));
    }
    drop(vec);
}

#[mockalloc::test]
fn slices_clone_the_selection() {
    new_vec!(vec = ["a", "b", "c", "d", "e"]);

    let part = vec.slice_step(Some(-1), None, -2).unwrap();
    assert_eq!(part, S!(["e", "c", "a"]));

    let part = vec.slice(Some(1), Some(3));
    drop(vec);
    assert_eq!(part, S!(["b", "c"]));
}

#[mockalloc::test]
fn concat_and_repeat_clone() {
    new_vec!(a = ["a"]);
    new_vec!(b = ["b", "c"]);

    let mut c = &a + &b;
    c.set(0, S!("z")).unwrap();
    assert_eq!(a, S!(["a"]));
    assert_eq!(c, S!(["z", "b", "c"]));

    let repeated = b.repeat(2).unwrap();
    assert_eq!(repeated, S!(["b", "c", "b", "c"]));

    let mut d = a.clone();
    d.concat_in_place(&b);
    d.concat_in_place_any(&b).unwrap();
    assert!(d.concat_in_place_any(&S!("d")).is_err());
    assert_eq!(d, S!(["a", "b", "c", "b", "c"]));
}

#[mockalloc::test]
fn search_by_borrowed_value() {
    new_vec!(vec = ["apple", "Banana", "cherry", "banana"]);

    let eq = |item: &String, value: &str| item == value;
    let caseless = |item: &String, value: &str| item.eq_ignore_ascii_case(value);

    assert_eq!(vec.index_of("banana", eq), Ok(3));
    assert_eq!(vec.index_of("banana", caseless), Ok(1));
    assert_eq!(vec.index_of("durian", eq), Err(Error::NotFound));
    assert_eq!(vec.count("banana", caseless), 2);
}

#[mockalloc::test]
fn reverse_and_clone_from() {
    new_vec!(mut vec = ["1", "2", "3"]);
    vec.reverse();
    assert_eq!(vec, S!(["3", "2", "1"]));

    let mut other: Vector<String> = Vector::new();
    other.append(S!("old"));
    other.clone_from(&vec);
    assert_eq!(other, vec);
}

#[mockalloc::test]
fn grow_clones_the_value() {
    new_vec!(mut vec);
    vec.grow(3, S!("x"));
    vec.grow(0, S!("never"));
    assert_eq!(vec, S!(["x", "x", "x"]));

    let macro_made: Vector<String> = vectorish::vector![S!("y"); 2];
    assert_eq!(macro_made, S!(["y", "y"]));
}

#[mockalloc::test]
fn std_vec_round_trip() {
    let vec: Vector<String> = Vector::from(vec![S!("a"), S!("b")]);
    let back: Vec<String> = vec.into();
    assert_eq!(back, S!(["a", "b"]));
}
