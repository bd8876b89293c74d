//! Shared Tailwind class constants so form fields and cards look the same on
//! every page.

pub struct Theme;

impl Theme {
    /// Standard text/email/password input.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

    /// Label above an input.
    pub const LABEL: &'static str =
        "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Card wrapping a form or a wizard step.
    pub const CARD: &'static str = "w-full rounded-xl border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800 sm:p-8";

    /// Inline field error text shown under an input.
    pub const FIELD_ERROR: &'static str = "mt-1 text-sm text-red-600 dark:text-red-400";
}
