#![no_main]

use demitasse::jvm::ClassFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(class_file) = ClassFile::parse(data) {
        assert!(class_file.constant_pool.slot_count() >= 1);
        assert!(class_file.constant_pool.get(0).is_none());
    }
});
