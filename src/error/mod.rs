mod behavior;

pub use behavior::BehaviorError;
