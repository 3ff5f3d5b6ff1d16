/// Expands to a doc string linking to the given section of the JVM Specification.
macro_rules! see_jvm_spec {
    ($chapter:literal, $section:literal) => {
        concat!(
            "See the [JVM Specification §", $chapter, ".", $section,
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-", $chapter,
            ".html#jvms-", $chapter, ".", $section, ") for more information."
        )
    };
    ($chapter:literal, $section:literal, $subsection:literal) => {
        concat!(
            "See the [JVM Specification §", $chapter, ".", $section, ".", $subsection,
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-", $chapter,
            ".html#jvms-", $chapter, ".", $section, ".", $subsection, ") for more information."
        )
    };
}

pub(crate) use see_jvm_spec;
