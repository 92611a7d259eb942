#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, i32)>, String)| {
    let mut trie = pathtrie::PathTrie::new();

    for (route, item) in data.0 {
        if trie.insert(route.as_str(), item).is_err() {
            continue;
        }

        // every accepted route matches itself
        assert_eq!(trie.search(&route).value, Some(&item));
    }

    let _ = trie.search(&data.1);
    let _ = trie.routes();
});
