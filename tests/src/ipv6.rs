use crate::init_logging;
use prefix_tree::{Family, PrefixMode, PrefixOps, PrefixTree, Range};
use std::net::{IpAddr, Ipv6Addr};

fn route(def: &str, next_hop: u32) -> Range<u32> {
    Range::with_mode(def, Family::Ipv6, PrefixMode::Strict, next_hop).unwrap()
}

fn next_hop(tree: &PrefixTree<u32>, addr: &str) -> Option<u32> {
    let addr: Ipv6Addr = addr.parse().unwrap();
    let point: Range<()> = IpAddr::V6(addr).into();
    tree.search(&point).unwrap().copied()
}

#[test]
fn routing_table_lookups() {
    init_logging();
    let mut tree = PrefixTree::default();
    tree.insert(route("2001:db8:1:2::/64", 4)).unwrap();
    tree.insert(route("::/0", 1)).unwrap();
    tree.insert(route("2001:db8:1::/48", 3)).unwrap();
    tree.insert(route("2001:db8::/32", 2)).unwrap();
    tree.insert(route("fe80::/10", 5)).unwrap();
    // A /48 for every subnet of 2001:db8:ff00::/40
    for subnet in 0..256u32 {
        let def = format!("2001:db8:ff{:02x}::/48", subnet);
        tree.insert(route(&def, 100 + subnet)).unwrap();
    }

    assert_eq!(tree.family(), Some(Family::Ipv6));
    assert_eq!(tree.len(), 5 + 256);
    assert!(tree.height() > 1);

    // Keys match exactly
    assert_eq!(next_hop(&tree, "2001:db8:1:2::1"), Some(4));
    assert_eq!(next_hop(&tree, "fe80::1"), Some(5));
    assert_eq!(next_hop(&tree, "2001:db8:ff2a::9"), Some(100 + 0x2a));
    assert_eq!(next_hop(&tree, "2001:db8:ffff:ffff::"), Some(100 + 0xff));
    // Cover entries yield one of the covering routes
    let covered = [
        ("2001:db8:1:3::1", &[1, 2, 3][..]),
        ("2001:db8:2::1", &[1, 2][..]),
        ("2001:db9::1", &[1][..]),
        ("ff02::1", &[1][..]),
    ];
    for (probe, hops) in covered.iter() {
        let hop = next_hop(&tree, probe);
        assert!(hop.map_or(false, |h| hops.contains(&h)), "{} routed to {:?}", probe, hop);
    }
}

#[test]
fn strict_mode_rejects_host_bits() {
    assert!(Range::with_mode("2001:db8::1/32", Family::Ipv6, PrefixMode::Strict, ()).is_err());
    let lenient = Range::new("2001:db8::1/32", Family::Ipv6, ()).unwrap();
    assert_eq!(lenient, route("2001:db8::/32", 0));
}
