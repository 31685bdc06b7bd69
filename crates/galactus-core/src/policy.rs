//! Keep policies decide which modules survive a prune.

use galactus_schema::Module;

/// Decides whether an installed module is kept.
///
/// Any `Fn(&Module, bool) -> bool` closure is a policy; the flag is whether
/// the module is a development dependency.
pub trait KeepPolicy: Send + Sync {
    /// Return `true` to keep `module` and keep pruning inside it.
    fn should_keep(&self, module: &Module, is_dev_dependency: bool) -> bool;
}

impl<F> KeepPolicy for F
where
    F: Fn(&Module, bool) -> bool + Send + Sync,
{
    fn should_keep(&self, module: &Module, is_dev_dependency: bool) -> bool {
        self(module, is_dev_dependency)
    }
}

/// Keeps everything that is not a development dependency.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultKeepPolicy;

impl KeepPolicy for DefaultKeepPolicy {
    fn should_keep(&self, _: &Module, is_dev_dependency: bool) -> bool {
        !is_dev_dependency
    }
}

/// Evaluate `policy` for `module`, deriving the development flag from its
/// classification.
pub fn should_keep_module(policy: &dyn KeepPolicy, module: &Module) -> bool {
    policy.should_keep(module, module.is_dev_dependency())
}

#[cfg(test)]
mod tests {
    use super::*;
    use galactus_schema::DepType;

    fn module(dep_type: DepType) -> Module {
        Module::new("m", "/tmp/m", dep_type, 1)
    }

    #[test]
    fn test_default_policy() {
        let policy = DefaultKeepPolicy;
        assert!(should_keep_module(&policy, &module(DepType::Prod)));
        assert!(should_keep_module(&policy, &module(DepType::Optional)));
        assert!(should_keep_module(&policy, &module(DepType::Root)));
        assert!(!should_keep_module(&policy, &module(DepType::Dev)));
        assert!(!should_keep_module(&policy, &module(DepType::DevOptional)));
    }

    #[test]
    fn test_closure_receives_dev_flag() {
        let keep_dev_only = |_: &Module, is_dev: bool| is_dev;
        assert!(should_keep_module(&keep_dev_only, &module(DepType::DevOptional)));
        assert!(!should_keep_module(&keep_dev_only, &module(DepType::Root)));
    }

    #[test]
    fn test_closure_result_is_returned_verbatim() {
        let by_name = |m: &Module, _: bool| m.name == "keep-me";
        let kept = Module::new("keep-me", "/tmp/keep-me", DepType::Dev, 1);
        assert!(should_keep_module(&by_name, &kept));
        assert!(!should_keep_module(&by_name, &module(DepType::Prod)));
    }
}
