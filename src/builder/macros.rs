//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::config::MachineConfig) from a literal
/// description of its states.
///
/// Expands to a [`ConfigBuilder`](crate::builder::ConfigBuilder) chain and
/// evaluates to `Result<MachineConfig, BuildError>`.
///
/// # Example
///
/// ```
/// use fsm_rewind::machine_config;
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle", "fail" => "broken" },
///         "broken" => {},
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.len(), 3);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::builder::ConfigBuilder::new()
            .initial($initial)
            $(
                .state(
                    $crate::builder::StateBuilder::new($state)
                        $(.on($event, $target))*
                )
            )*
            .build()
    };
}
