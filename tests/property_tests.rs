use dynlist::DynList;
use proptest::prelude::*;

fn list_of(values: &[i32]) -> DynList<i32> {
    let mut list = DynList::new();
    for &v in values {
        list.push(v);
    }
    list
}

proptest! {
    /// Property: pushed values come back in order and len counts them
    #[test]
    fn push_then_get_in_order(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let list = list_of(&values);

        prop_assert_eq!(list.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(list.try_get(i).unwrap(), v);
        }
        prop_assert!(list.capacity() >= list.len());
    }

    /// Property: insert puts the value at index and shifts the tail right
    #[test]
    fn insert_shifts_right(
        values in prop::collection::vec(any::<i32>(), 0..100),
        index_seed in any::<usize>(),
        value in any::<i32>(),
    ) {
        let index = index_seed % (values.len() + 1);
        let mut list = list_of(&values);

        list.insert(index, value).unwrap();

        prop_assert_eq!(list.len(), values.len() + 1);
        prop_assert_eq!(list.try_get(index).unwrap(), &value);
        prop_assert_eq!(&list.as_slice()[..index], &values[..index]);
        prop_assert_eq!(&list.as_slice()[index + 1..], &values[index..]);
    }

    /// Property: remove returns the value at index and shifts the tail left
    #[test]
    fn remove_shifts_left(
        values in prop::collection::vec(any::<i32>(), 1..100),
        index_seed in any::<usize>(),
    ) {
        let index = index_seed % values.len();
        let mut list = list_of(&values);

        let removed = list.remove(index).unwrap();

        prop_assert_eq!(removed, values[index]);
        prop_assert_eq!(list.len(), values.len() - 1);
        prop_assert_eq!(&list.as_slice()[..index], &values[..index]);
        prop_assert_eq!(&list.as_slice()[index..], &values[index + 1..]);
    }

    /// Property: out-of-range indices never change the list
    #[test]
    fn out_of_range_is_rejected(
        values in prop::collection::vec(any::<i32>(), 0..50),
        extra in 1usize..1000,
    ) {
        let mut list = list_of(&values);
        let len = values.len();

        prop_assert!(list.insert(len + extra, 0).is_err());
        prop_assert!(list.replace(len + extra - 1, 0).is_err());
        prop_assert!(list.remove(len + extra - 1).is_err());
        prop_assert_eq!(list.as_slice(), values.as_slice());
    }

    /// Property: quicksort and the standard sort produce the same sequence
    #[test]
    fn quicksort_matches_sort(values in prop::collection::vec(any::<i16>(), 0..300)) {
        let mut sorted: DynList<i16> = values.iter().copied().collect();
        sorted.sort();

        let mut quick: DynList<i16> = values.iter().copied().collect();
        quick.quicksort();

        prop_assert_eq!(sorted, quick);
    }

    /// Property: comparator forms agree as well, here on a reversed order
    #[test]
    fn quicksort_by_matches_sort_by(values in prop::collection::vec(0u8..16, 0..300)) {
        let mut sorted: DynList<u8> = values.iter().copied().collect();
        sorted.sort_by(|a, b| b.cmp(a));

        let mut quick: DynList<u8> = values.iter().copied().collect();
        quick.quicksort_by(|a, b| b.cmp(a));

        prop_assert_eq!(sorted, quick);
    }

    /// Property: sorting a sorted list leaves it as is
    #[test]
    fn sorting_is_idempotent(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut list = list_of(&values);
        list.quicksort();
        let once = list.clone();

        list.quicksort();
        prop_assert_eq!(&list, &once);

        list.sort();
        prop_assert_eq!(&list, &once);
    }
}
