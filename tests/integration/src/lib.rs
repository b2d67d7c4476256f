//! Shared expectations for the brandtag integration tests

/// The line printed for each built-in concrete type, in registry order
pub const EXPECTED_LINES: [&str; 4] = [
	"Iphone_X=[@User(name=乔布斯)@User(name=库克)]",
	"Huawei_P20=[@User(name=任正非)@User(name=孟晚舟)]",
	"Xiaomi_9=[@User(name=雷军)@User(name=林斌)]",
	"OtherPhone=[@User(name=张三)@User(name=air)]",
];
