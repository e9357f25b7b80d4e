use sentinel_list::SentinelList;

fn main() {
    let mut list: SentinelList<u32> = SentinelList::new();

    list.push_front(1);
    list.push_front(2);
    list.push_back(3);
    println!("forward:  {list}"); // [2, 1, 3]
    println!("backward: {:?}", backward(&list)); // [3, 1, 2]

    list.reverse();
    println!("reversed");
    println!("forward:  {list}"); // [3, 1, 2]
    println!("backward: {:?}", backward(&list)); // [2, 1, 3]

    let newcomer = list.push_front(99);
    println!("forward:  {list}"); // [99, 3, 1, 2]

    list.remove(newcomer).expect("the newcomer was just inserted");
    println!("forward:  {list}"); // [3, 1, 2]
}

fn backward(list: &SentinelList<u32>) -> Vec<u32> {
    list.iter().rev().copied().collect()
}
