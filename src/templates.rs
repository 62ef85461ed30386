//! Built-in file templates for `vpm module new` and `vpm source new`.
//!
//! Every generated `CMakeLists.txt` consumes the variables written by
//! [`crate::sync`], so a module builds as soon as it has been synchronized.

/// C++ identifier derived from a module name (`my-lib` -> `my_lib`).
pub fn cpp_identifier(name: &str) -> String {
    name.replace(['-', ' '], "_")
}

// --- Module files ---

pub fn readme(module_name: &str, module_type: &str) -> String {
    format!(
        r#"# {0}

`{0}` is a `{1}` module.

## Layout

- `include/` - public headers
- `src/` - implementation files
- `test/` - unit tests
- `resources/` - resource files
- `.cmake/` - generated source lists (run `vpm sync` after adding files)

## Building

```sh
cmake --preset default
cmake --build --preset default
```
"#,
        module_name, module_type
    )
}

pub fn license(project_name: &str, organization: &str, contact_email: Option<&str>) -> String {
    let contact = contact_email
        .map(|email| format!(" <{}>", email))
        .unwrap_or_default();
    format!(
        r#"MIT License

Copyright (c) {1}{2}

Permission is hereby granted, free of charge, to any person obtaining a copy
of {0} and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#,
        project_name, organization, contact
    )
}

pub fn module_header(target_name: &str) -> String {
    let ns = cpp_identifier(target_name);
    format!(
        r#"#pragma once

#include <string>

namespace {0} {{

/// Version of the {1} module.
std::string version();

}} // namespace {0}
"#,
        ns, target_name
    )
}

/// Module `CMakeLists.txt`; `is_app` selects executable vs library.
pub fn module_cmake_lists(target_name: &str, var_prefix: &str, is_app: bool) -> String {
    let target = if is_app {
        format!(
            r#"add_executable({0}
    ${{{1}_SOURCES}}
    ${{{1}_HEADERS}}
    ${{{1}_RESOURCES}}
)

target_include_directories({0} PRIVATE ${{CMAKE_CURRENT_SOURCE_DIR}}/include)"#,
            target_name, var_prefix
        )
    } else {
        format!(
            r#"add_library({0}
    ${{{1}_SOURCES}}
    ${{{1}_HEADERS}}
    ${{{1}_RESOURCES}}
)
add_library({0}::{0} ALIAS {0})

target_include_directories({0}
    PUBLIC
        $<BUILD_INTERFACE:${{CMAKE_CURRENT_SOURCE_DIR}}/include>
        $<INSTALL_INTERFACE:include>
)"#,
            target_name, var_prefix
        )
    };

    format!(
        r#"cmake_minimum_required(VERSION 3.21)

include(${{CMAKE_CURRENT_SOURCE_DIR}}/.cmake/sources.cmake)

{0}

target_compile_features({1} PUBLIC cxx_std_17)

if(BUILD_TESTING)
    add_subdirectory(test)
endif()
"#,
        target, target_name
    )
}

pub fn module_source(target_name: &str, header_include: &str, is_app: bool) -> String {
    let ns = cpp_identifier(target_name);
    if is_app {
        format!(
            r#"#include "{1}"

#include <iostream>

namespace {0} {{

std::string version() {{ return "0.1.0"; }}

}} // namespace {0}

int main() {{
    std::cout << "{2} " << {0}::version() << std::endl;
    return 0;
}}
"#,
            ns, header_include, target_name
        )
    } else {
        format!(
            r#"#include "{1}"

namespace {0} {{

std::string version() {{ return "0.1.0"; }}

}} // namespace {0}
"#,
            ns, header_include
        )
    }
}

/// `test/CMakeLists.txt`. `link_target` is the library under test, if any.
pub fn test_cmake_lists(
    test_target: &str,
    var_prefix: &str,
    use_gtest: bool,
    link_target: Option<&str>,
) -> String {
    let mut libs = Vec::new();
    if let Some(target) = link_target {
        libs.push(target.to_string());
    }
    if use_gtest {
        libs.push("GTest::gtest".to_string());
    }

    let find = if use_gtest {
        "find_package(GTest CONFIG REQUIRED)\n\n"
    } else {
        ""
    };
    let link = if libs.is_empty() {
        String::new()
    } else {
        format!(
            "target_link_libraries({} PRIVATE {})\n",
            test_target,
            libs.join(" ")
        )
    };
    let register = if use_gtest {
        format!("include(GoogleTest)\ngtest_discover_tests({})\n", test_target)
    } else {
        format!("add_test(NAME {0} COMMAND {0})\n", test_target)
    };

    format!(
        r#"{0}add_executable({1} ${{{2}_TEST_SOURCES}})
target_include_directories({1} PRIVATE ${{CMAKE_CURRENT_SOURCE_DIR}}/../include)
{3}
{4}"#,
        find, test_target, var_prefix, link, register
    )
}

pub fn test_main(target_name: &str, use_gtest: bool) -> String {
    if use_gtest {
        format!(
            r#"// Test runner for {0}
#include <gtest/gtest.h>

int main(int argc, char** argv) {{
    ::testing::InitGoogleTest(&argc, argv);
    return RUN_ALL_TESTS();
}}
"#,
            target_name
        )
    } else {
        format!(
            r#"// Test runner for {0}
#include <cstdlib>
#include <iostream>

int main() {{
    std::cout << "{0}: no tests registered" << std::endl;
    return EXIT_SUCCESS;
}}
"#,
            target_name
        )
    }
}

pub fn doxyfile(project_name: &str) -> String {
    format!(
        r#"PROJECT_NAME           = "{}"
OUTPUT_DIRECTORY       = docs/generated
INPUT                  = include src
RECURSIVE              = YES
FILE_PATTERNS          = *.h *.hpp *.cpp
EXTRACT_ALL            = YES
GENERATE_HTML          = YES
GENERATE_LATEX         = NO
"#,
        project_name
    )
}

// --- Source files ---

fn namespace_open(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("namespace {} {{\n\n", namespace)
    }
}

fn namespace_close(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("\n}} // namespace {}\n", namespace)
    }
}

fn qualified(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", namespace, name)
    }
}

pub fn class_header(class_name: &str, namespace: &str) -> String {
    format!(
        r#"#pragma once

{1}class {0} {{
public:
    {0}();
    ~{0}();

    {0}(const {0}&) = delete;
    {0}& operator=(const {0}&) = delete;
}};
{2}"#,
        class_name,
        namespace_open(namespace),
        namespace_close(namespace)
    )
}

/// `header_include` is the path used in `#include "..."`.
pub fn class_source(class_name: &str, header_include: &str, namespace: &str) -> String {
    format!(
        r#"#include "{1}"

{2}{0}::{0}() = default;

{0}::~{0}() = default;
{3}"#,
        class_name,
        header_include,
        namespace_open(namespace),
        namespace_close(namespace)
    )
}

pub fn gtest_simple(class_name: &str, header_include: &str, namespace: &str) -> String {
    format!(
        r#"#include <gtest/gtest.h>

#include "{1}"

TEST({0}Test, CanBeConstructed) {{
    {2} instance;
    SUCCEED();
}}
"#,
        class_name,
        header_include,
        qualified(namespace, class_name)
    )
}

pub fn gtest_fixture(class_name: &str, header_include: &str, namespace: &str) -> String {
    format!(
        r#"#include <gtest/gtest.h>

#include <memory>

#include "{1}"

class {0}TestFixture : public ::testing::Test {{
protected:
    void SetUp() override {{ instance = std::make_unique<{2}>(); }}

    void TearDown() override {{ instance.reset(); }}

    std::unique_ptr<{2}> instance;
}};

TEST_F({0}TestFixture, IsCreated) {{
    ASSERT_NE(instance, nullptr);
}}
"#,
        class_name,
        header_include,
        qualified(namespace, class_name)
    )
}

pub fn gtest_parametrized(class_name: &str, header_include: &str, namespace: &str) -> String {
    format!(
        r#"#include <gtest/gtest.h>

#include "{1}"

class {0}ParamTest : public ::testing::TestWithParam<int> {{}};

TEST_P({0}ParamTest, HandlesValue) {{
    {2} instance;
    const int value = GetParam();
    EXPECT_GT(value, 0);
}}

INSTANTIATE_TEST_SUITE_P({0}TestSuite, {0}ParamTest, ::testing::Values(1, 2, 3));
"#,
        class_name,
        header_include,
        qualified(namespace, class_name)
    )
}

/// Qt resource collection with commented-out sample entries.
pub fn qrc(prefix: &str) -> String {
    format!(
        r#"<!DOCTYPE RCC>
<RCC version="1.0">
    <qresource prefix="/{}">
        <!-- <file>images/icon.png</file> -->
        <!-- <file alias="main.qml">qml/main.qml</file> -->
    </qresource>
</RCC>
"#,
        prefix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lib_cmake_uses_generated_variables() {
        let text = module_cmake_lists("net-core", "NET_CORE", false);
        assert!(text.contains("include(${CMAKE_CURRENT_SOURCE_DIR}/.cmake/sources.cmake)"));
        assert!(text.contains("add_library(net-core\n    ${NET_CORE_SOURCES}"));
        assert!(text.contains("add_library(net-core::net-core ALIAS net-core)"));
        assert!(text.contains("add_subdirectory(test)"));
    }

    #[test]
    fn test_app_cmake_is_executable() {
        let text = module_cmake_lists("tool", "TOOL", true);
        assert!(text.contains("add_executable(tool"));
        assert!(!text.contains("ALIAS"));
    }

    #[test]
    fn test_test_cmake_variants() {
        let gtest = test_cmake_lists("foo_test", "FOO", true, Some("foo"));
        assert!(gtest.contains("find_package(GTest CONFIG REQUIRED)"));
        assert!(gtest.contains("add_executable(foo_test ${FOO_TEST_SOURCES})"));
        assert!(gtest.contains("target_link_libraries(foo_test PRIVATE foo GTest::gtest)"));
        assert!(gtest.contains("gtest_discover_tests(foo_test)"));

        let plain = test_cmake_lists("app_test", "APP", false, None);
        assert!(!plain.contains("GTest"));
        assert!(!plain.contains("target_link_libraries"));
        assert!(plain.contains("add_test(NAME app_test COMMAND app_test)"));
    }

    #[test]
    fn test_class_in_namespace() {
        let header = class_header("Parser", "net::http");
        assert!(header.contains("namespace net::http {"));
        assert!(header.contains("class Parser {"));
        let source = class_source("Parser", "net/http/Parser.h", "net::http");
        assert!(source.contains("#include \"net/http/Parser.h\""));
        assert!(source.contains("Parser::Parser() = default;"));
    }

    #[test]
    fn test_class_without_namespace() {
        let header = class_header("Widget", "");
        assert!(!header.contains("namespace"));
    }

    #[test]
    fn test_gtest_templates() {
        assert!(gtest_simple("Parser", "Parser.h", "").contains("TEST(ParserTest"));
        let fixture = gtest_fixture("Parser", "a/Parser.h", "a");
        assert!(fixture.contains("std::make_unique<a::Parser>()"));
        assert!(fixture.contains("TEST_F(ParserTestFixture"));
        let param = gtest_parametrized("Parser", "Parser.h", "");
        assert!(param.contains("::testing::Values(1, 2, 3)"));
    }

    #[test]
    fn test_qrc_and_identifier() {
        let text = qrc("Icons");
        assert!(text.contains("<qresource prefix=\"/Icons\">"));
        assert!(text.contains("<!-- <file>images/icon.png</file> -->"));
        assert_eq!(cpp_identifier("my-lib core"), "my_lib_core");
    }

    #[test]
    fn test_license_contact() {
        let text = license("foo", "Acme", Some("dev@acme.io"));
        assert!(text.contains("Copyright (c) Acme <dev@acme.io>"));
        assert!(license("foo", "Acme", None).contains("Copyright (c) Acme\n"));
    }
}
