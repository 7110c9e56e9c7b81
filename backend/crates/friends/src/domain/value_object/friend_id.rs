use kernel::id::Id;

pub struct FriendMarker;
pub type FriendId = Id<FriendMarker>;
