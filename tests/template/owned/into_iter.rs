#[mockalloc::test]
fn into_iter_yields_in_order() {
    new_vec!(vec = ["a", "b", "c"]);
    let items: Vec<String> = vec.into_iter().collect();
    assert_eq!(items, S!(["a", "b", "c"]));
}

#[mockalloc::test]
fn partially_consumed_iterators_drop_the_rest() {
    new_vec!(vec = ["a", "b", "c", "d", "e"]);

    let mut iter = vec.into_iter();
    assert_eq!(iter.next(), Some(S!("a")));
    assert_eq!(iter.next_back(), Some(S!("e")));
    assert_eq!(iter.as_slice(), S!(["b", "c", "d"]));
    assert_eq!(iter.len(), 3);
    drop(iter);
}

#[mockalloc::test]
fn both_ends_meet() {
    new_vec!(vec = ["1", "2", "3", "4"]);

    let mut iter = vec.into_iter();
    assert_eq!(iter.next_back(), Some(S!("4")));
    assert_eq!(iter.next(), Some(S!("1")));
    assert_eq!(iter.next_back(), Some(S!("3")));
    assert_eq!(iter.next(), Some(S!("2")));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[mockalloc::test]
fn borrowing_iterators() {
    new_vec!(mut vec = ["a", "b"]);

    for item in &mut vec {
        item.push('!');
    }

    let joined: Vec<&str> = (&vec).into_iter().map(String::as_str).collect();
    assert_eq!(joined, ["a!", "b!"]);
}

#[mockalloc::test]
fn collect_from_iterator() {
    let vec: vectorish::Vector<String> = (0..3).map(|x| S!(x)).collect();
    assert_eq!(vec, S!(["0", "1", "2"]));
}
