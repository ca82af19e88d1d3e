use quicklist::QuickList;

fn main() {
    let mut list = QuickList::new();
    for i in 0..1_000 {
        list.append(i);
    }

    println!("len: {}", list.len());
    println!("distance: {}", list.distance());
    println!("anchors: {}", list.anchor_count());

    println!("get(500): {:?}", list.get(500));
    println!("cached: {:?}", list.cached_position());

    list.add(500, -1);
    let at_500 = list.get(500).copied();
    let at_501 = list.get(501).copied();
    println!("after add(500, -1): {:?} {:?}", at_500, at_501);

    list.remove_range(100, 899);
    println!(
        "after remove_range(100, 899): len {} distance {}",
        list.len(),
        list.distance()
    );

    let tail: Vec<_> = list.iter_rev().take(5).collect();
    println!("last five, reversed: {:?}", tail);
}
