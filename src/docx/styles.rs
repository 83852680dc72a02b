/// word/styles.xml：默认正文楷体小四黑色，标题一楷体小二加粗居中
pub fn generate_styles() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:docDefaults>
        <w:rPrDefault>
            <w:rPr>
                <w:rFonts w:ascii="楷体" w:hAnsi="楷体" w:eastAsia="楷体"/>
                <w:color w:val="000000"/>
                <w:sz w:val="24"/>
            </w:rPr>
        </w:rPrDefault>
        <w:pPrDefault/>
    </w:docDefaults>
    <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
        <w:name w:val="Normal"/>
    </w:style>
    <w:style w:type="paragraph" w:styleId="Heading1">
        <w:name w:val="heading 1"/>
        <w:basedOn w:val="Normal"/>
        <w:pPr>
            <w:spacing w:before="480" w:after="480"/>
            <w:jc w:val="center"/>
        </w:pPr>
        <w:rPr>
            <w:rFonts w:ascii="楷体" w:hAnsi="楷体" w:eastAsia="楷体"/>
            <w:b/>
            <w:color w:val="000000"/>
            <w:sz w:val="36"/>
        </w:rPr>
    </w:style>
</w:styles>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_carry_east_asia_font() {
        let xml = generate_styles();
        assert!(xml.contains(r#"w:eastAsia="楷体""#));
        assert!(xml.contains(r#"w:styleId="Heading1""#));
    }
}
