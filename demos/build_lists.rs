use slink::LinkedList;

// cargo run --example build_lists
fn main() {
    let mut lst: LinkedList<i64> = LinkedList::from_string("6, 10, 8, 15").unwrap();
    println!("built: {lst}");
    println!("nodes: {}", lst.dump_nodes());

    lst.insert_front(3);
    lst.insert_end(20);
    println!("after inserts: {lst}");

    let removed = lst.delete_node_nth(2).unwrap();
    println!("removed node {} with value {}", removed.index, removed.value);

    lst.delete_front().unwrap();
    lst.delete_last().unwrap();
    println!("after deletes: {lst}");

    if let Some(value) = lst.get_nth_back(1) {
        println!("tail value: {value}");
    }
    lst.verify_integrity().unwrap();
}
