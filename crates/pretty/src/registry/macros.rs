/// Registers a renderer function for a type via `inventory`.
///
/// ```ignore
/// fn render_celsius(value: &Celsius) -> String {
///     format!("{:.1}°C", value.0)
/// }
///
/// ornate_pretty::register_renderer!(celsius: Celsius => render_celsius);
/// ornate_pretty::register_renderer!(celsius_loud: Celsius => render_loud, priority: 10);
/// ```
///
/// The registration is stored in a static named `RENDERER_<name>`.
#[macro_export]
macro_rules! register_renderer {
	(
		$name:ident: $ty:ty => $func:path
		$(, priority: $priority:expr)?
		$(, source: $source:expr)?
		$(,)?
	) => {
		$crate::__private::paste::paste! {
			#[allow(non_upper_case_globals)]
			pub static [<RENDERER_ $name>]: $crate::registry::RendererDef = $crate::registry::RendererDef {
				id: concat!(module_path!(), "::", stringify!($name)),
				target: ::core::any::TypeId::of::<$ty>,
				target_name: ::core::any::type_name::<$ty>,
				priority: $crate::__renderer_opt!($({$priority})?, 0),
				source: $crate::__renderer_opt!(
					$({$source})?,
					$crate::registry::RegistrySource::Crate(env!("CARGO_PKG_NAME"))
				),
				render: |value: &dyn ::core::any::Any| value.downcast_ref::<$ty>().map($func),
			};

			$crate::__private::inventory::submit! { $crate::registry::RendererReg(&[<RENDERER_ $name>]) }
		}
	};
}

/// Registers a [`PrettyPrintable`](crate::PrettyPrintable) type as its own renderer.
///
/// ```ignore
/// impl PrettyPrintable for Money {
///     fn pretty(&self) -> String {
///         format!("${}.{:02}", self.cents / 100, self.cents % 100)
///     }
/// }
///
/// ornate_pretty::printable!(Money);
/// ```
#[macro_export]
macro_rules! printable {
	($ty:ty $(, priority: $priority:expr)? $(,)?) => {
		const _: () = {
			static DEF: $crate::registry::RendererDef = $crate::registry::RendererDef {
				id: concat!(module_path!(), "::", stringify!($ty)),
				target: ::core::any::TypeId::of::<$ty>,
				target_name: ::core::any::type_name::<$ty>,
				priority: $crate::__renderer_opt!($({$priority})?, 0),
				source: $crate::registry::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
				render: |value: &dyn ::core::any::Any| {
					value
						.downcast_ref::<$ty>()
						.map(<$ty as $crate::PrettyPrintable>::pretty)
				},
			};

			$crate::__private::inventory::submit! { $crate::registry::RendererReg(&DEF) }
		};
	};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __renderer_opt {
	(, $default:expr) => {
		$default
	};
	({$val:expr}, $default:expr) => {
		$val
	};
}
