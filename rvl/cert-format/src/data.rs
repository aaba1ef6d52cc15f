/*!
    Byte content of the built-in certificates: signatures, public keys, and
    the common AES keys. Opaque constant data, transcribed from the
    platform's certificate set.
*/

use hex_literal::hex;

pub(crate) const ROOT_MODULUS: [u8; 512] = hex!(
    "f8246c58bae7500301fbb7c2ebe0010571da922378f0514ec0031dd0d21ed3d0"
    "7efc852069b5de9bb951a8bc90a244926d379295ae9436aaa6a302510c7b1ded"
    "d5fb20869d7f3016f6be65d383a16db3321b95351890b17002937ee193f57e99"
    "a2474e9d3824c7aee38541f567e7518c7a0e38e7ebaf41191bcff17b42a6b4ed"
    "e6ce8de7318f7f5204b3990e226745afd485b24493008b08c7f6b7e56b02b3e8"
    "fe0c9d859cb8b68223b8ab27ee5f6538078b2db91e2a153e85818072a23b6dd9"
    "3281054f6fb0f6f5ad283eca0b7af35455e03da7b68326f3ec834af314048ac6"
    "df20d28508673cab62a2c7bc131a533e0b66806b1c30664b372331bdc4b0cad8"
    "d11ee7bbd9285548aaec1f66e821b3c8a0476900c5e688e80cce3c61d69cbba1"
    "37c6604f7a72dd8c7b3e3d51290daa6a597b081f9d3633a3467a356109aca7dd"
    "7d2e2fb2c1aeb8e20f4892d8b9f8b46f4e3c11f4f47d8b757dfefea3899c3359"
    "5c5efdebcbabe8413e3a9a803c69356eb2b2ad5cc4c858455ef5f7b30644b47c"
    "64068cdf809f76025a2db446e03d7cf62f34e702457b02a4cf5d9dd53ca53a7c"
    "a629788c67ca08bfecca43a957ad16c94e1cd875ca107dce7e0118f0df6bfee5"
    "1ddbd991c26e60cd4858aa592c820075f29f526c917c6fe5403ea7d4a50cec3b"
    "7384de886e82d2eb4d4e42b5f2b149a81ea7ce7144dc2994cfc44e1f91cbd495"
);

pub(crate) const RETAIL_CA_SIGNATURE: [u8; 512] = hex!(
    "b3adb3226b3c3dff1b4b407716ff4f7ad76486c895ac562d21f10601d4f66428"
    "191c07768fdf1ae2ce7b27c90fbc0ad0312578ec0779b657d4372413a7f86f0c"
    "14c0ef6e0941ed2b05ec3957360789004a878d2e9df8c7a5a9f8cab311b11879"
    "57bbf898e2a25402cf5439cf2bbfa0e1f85c066e839ae094ca47e01558f56e6f"
    "34e92aa2dc38937e37cd8c5c4dfd2f114fe868c9a8d9fed86e0c2175a2bd7e89"
    "b9c7b513f41a7961443910eff9d7fe572218d56dfb7f497aa4cb90d4f1aeb176"
    "e4685da7944060982f0448401fcfc6baebda1630b473b415233508070a9f4f89"
    "78e62cec5e9246a5a8bda0857868750c3a112faf95e838c8990e87b162cd10da"
    "b3319665ef889b541bb336bb67539fafc2ae2d0a2e75c02374ea4eac8d99507f"
    "59b95377305f2635c608a99093ac8fc6de23b97aea70b4c4cf66b30e58320ec5"
    "b6720448ce3bb11c531fcb70287cb5c27c674fbbfd8c7fc94220a473231d587e"
    "5a1a1a82e37579a1bb826ece0171c97563474b1d46e679b282376211cdc7002f"
    "4687c23c6dc0d5b5786ee1f273ff0192500ff4c7506aee72b6f43df608fea583"
    "a1f9860f87af524454bb47c3060c94e99bf7d632a7c8ab4b4ff535211fc18047"
    "bb7afa5a2bd7b884ad8e564f5b89ff379737f1f5013b1f9ec4186f922ad5c4b3"
    "c0d5870b9c04af1ab5f3bc6d0af17d4708e443e973f7b7707754baf3ecd2ac49"
);

pub(crate) const RETAIL_CA_MODULUS: [u8; 256] = hex!(
    "b279c9e2eee121c6eaf44ff639f88f078b4b77ed9f9560b0358281b50e55ab72"
    "1115a177703c7a30fe3ae9ef1c60bc1d974676b23a68cc04b198525bc968f11d"
    "e2db50e4d9e7f071e562dae2092233e9d363f61dd7c19ff3a4a91e8f6553d471"
    "dd7b84b9f1b8ce7335f0f5540563a1eab83963e09be901011f99546361287020"
    "e9cc0dab487f140d6626a1836d27111f2068de4772149151cf69c61ba60ef9d9"
    "49a0f71f5499f2d39ad28c7005348293c431ffbd33f6bca60dc7195ea2bcc56d"
    "200baf6d06d09c41db8de9c720154ca4832b69c08c69cd3b073a0063602f462d"
    "338061a5ea6c915cd5623579c3eb64ce44ef586d14baaa8834019b3eebeed379"
);

pub(crate) const RETAIL_TICKET_SIGNATURE: [u8; 256] = hex!(
    "7d9d5eba5281dca7065d2f0868db8ac73ace7ea991f1969fe1d0f2c11faec0c3"
    "f01adcb446ade5ca03b625219462c6e1410db9e63fde98d1af263b4cb2878427"
    "8272ef27134b87c258d67b62f2b5bf9cb6ba8c89192ec50689ac7424a0220940"
    "03ee98a4bd2f013b593fe5666cd5eb5ad7a49310f34efbb43d46cbf1b523cf82"
    "f68eb56db904a7c2a82be11d78d39ba20d90d30742db5e7ac1eff221510962cf"
    "a914a880dcf417ba99930aee08b0b0e51a3e9fafcdc2d7e3cba12f3ac00790de"
    "447ac3c538a8679238078bd4c4b245ac2916886d2a0e594eed5cc835698b4d62"
    "38df05724dccf681808a7074065930bff8514137e815fabaa172b8e0696c61e4"
);

pub(crate) const RETAIL_TICKET_MODULUS: [u8; 256] = hex!(
    "ad07a9378a7b100c7dc739be9eddb7320089ab25b1f871af5aa9f4589ed18302"
    "328e811a1fefd009c8063643f854b9e13bbb613a7acf8714856ba45baae7bbc6"
    "4eb2f75d87ebf267ed0fa441a933665e577d5adeabfb462e7600ca9ce94dc4cb"
    "983992ab7a2fb3a39ea2bf9c53ecd0dcfa6b8b5eb2cba40ffa4075f8f2b2de97"
    "3811872df5e2a6c38b2fdc8e57ddbd5f46eb27d61952f6aef862b7ee9ac682a2"
    "b19aa9b558fbebb3892fbd50c9f5dc4a6e9c9bfe458034a942182ddeb75fe0d1"
    "b3df0e97e39980877018c2b283f135757c5a30fc3f3084a49aaac01ee706694f"
    "8e1448da123acc4ffa26aa38f7efbf278f369779775db7c5adc78991dcf8438d"
);

pub(crate) const RETAIL_TMD_SIGNATURE: [u8; 256] = hex!(
    "4e005ff13f86758db69c45630fd49bf4cc5d54cfcc22347257aba4ba53d2b33d"
    "e6ec9ea1575453ae5f933d96bff7cc7a79566e847b1b6077c2a93871301a8cd3"
    "c93d4db326e9879266e9d3ba9f79bc4638fa2d20a03a7067a411a7a0b7d912ad"
    "116a3ac46e324247c208bab4949cc52ed02f19f651e0df2e3653aaaf97a692bb"
    "a91dd86e242eb308775511ce98f6a2f426c92704d0fc8dd4809ed761bd11b785"
    "948cd6d07adba408d0f086f65aae1914b2889aa8ae4aa2aac761a90d412cb150"
    "09ab3e93fca924dece4f7c06abdc2e609d68be0073fa80576a145eedc48b7432"
    "870793c8fca6d83e096ec5f2a9c421e748b373405be2fa8ae15878e9d5238875"
);

pub(crate) const RETAIL_TMD_MODULUS: [u8; 256] = hex!(
    "c16df3832955c3295b72f0332e97ef14848a68049ca68eacde145033b86c108d"
    "48335c5d0cab770462544755452a900070b156925c1786e2cd206dccdc2c2e37"
    "6e27fcb42066cc0a8ce9fee85704e6ca631a2e7e917e947c3991773629d15561"
    "85bbd7b773ca37479e5faaa3b605e001e1ace58dd8f84782d645fce3a1cd03ab"
    "36f0f386b1a2d13740a1948a53ba1b0d8c4863cd6b2c2e206494804c62faa93a"
    "7e33a9ea786b59cae3ab3645f4cb8fd7906b8268cdacf17b3aec46831b91f6de"
    "186183bc4b326793c72e50d91e36a0dce2b97da0213e4696021f331cbeae8dfc"
    "928732aa44dc78e7199a3ddd57227e9e77de326386936c11aca70f8119d33a99"
);

pub(crate) const DEBUG_CA_SIGNATURE: [u8; 512] = hex!(
    "9056b50c3630ebf9c880d7b774780414b8a935895fd487bba01352c26f629918"
    "3e68ebf0ff79d42ef6b18cb6305db39b18a912331a5fa6ab3f50cbb8ddab4f66"
    "c5a358358f4a48334e3a86686e668c0cbe8447a166cbcb4efdf6253730076c2a"
    "78515694cd4cf491989fa509044172507a51ea8e71c61a9433b02a07a5f12657"
    "424d44752afe6556963633c7c397982a71a4807f09789aeefb2b0769cb1da4e0"
    "caa70bb8f6fdcf46bd35c08a009c75ab9f5223c95ff7daae2f53e8e1af250dab"
    "1d1bb2d76a4a3338699538c6cdfebc72d0c369ec1f919e81ee2b40906cfdd369"
    "97ab49d3a9d591ddc842a0e4897bc88bd021674f7ebcb200a3c421b3957f6550"
    "9cd1c32cb55eebb46299b827d62e53632cff7007bffb5dcf8415fd3fc3d834e3"
    "6bf31f59909f2f66c6eac1fdfb3420a8ec94dd25f10410f30833d8cb08702e4a"
    "8d27cca75bcb5ac3eb3096ec64f8f528ddfe51f6269cf69e8d794f1ad0460406"
    "fe79ec98009c6a3ee7bd3d263044066ba1f458b61340138b0332a310b8d3c23e"
    "ac22b0d606a98f5198d8cf3ac7638504ff0a02d137af4a7bb891469525f36ceb"
    "fdcb0cd7f2d5e72ecedc26fe5db20b71ab5b47d3a4c9efebf42f4848abf7f563"
    "7997088a4c750dde290f18778b2b8c3d6017eb2ada374e1d17eff998e8bfb253"
    "dee2f4b563026295eb8949b5b4d103a2f500115f45a1d0f23b92c03406e4b6d1"
);

pub(crate) const DEBUG_CA_MODULUS: [u8; 256] = hex!(
    "c9cc2dc4df2930e4df3f8c70a078948775ad5e9aa604c5b4d8eaff2aa1d21467"
    "6564efca28cc00154554a1a3ea1379e9e6caaced1593fe88d89ac6b8acccab6e"
    "207ceb7cca29809e2980440662b7d4382a15da43085745a9aae59aa05bdb32f6"
    "6869a2dd4295386c87ecdd3508a2cf60d01e23ec2fe698f470d6001549a2f067"
    "59131e534c7006057def1d18a83f0ac79cfe80ff5a91f2bed4a0837061190a03"
    "29902165403c9a908fb615739f3ce33bf1baea16c25bced7963facc9d24d9c0a"
    "d76fc020b2c4b84c10a741a2cc7d9bac3aaccca3529bac316a9aa75d2a26c7d7"
    "d288cba466c5fe5f454ae679744a90a15772db3b0e47a49af031d16dbeab332b"
);

pub(crate) const DEBUG_TICKET_SIGNATURE: [u8; 256] = hex!(
    "87c6f80faee2a85a01a1e04b0476c90408e693f514ee4696bcfd0691e3e7f967"
    "8f0b9b90aecb9956a7bb1c9b1ee39631c8d55dae203048f2ccffc5caca3ebeb0"
    "cc1e3a5826f57eb33e48445dd6ca34cd1a1be67018a4d8cc8541ce3e0dbaae1f"
    "683c4087df8465ba822af6bd37c69392e32fe2add023f5f3721a5676ae724719"
    "4371fe872727ab09e064874c1a9bf70f5e4b6f6d8fe524f4a82c28aafe806968"
    "f49fee7e2eb9b8f91e7bf8b3a9aa1d1ef2c1e3cb88b4bc472986ebc21d39f391"
    "3ecd00197141f2b53a2f47d6b2febe0d77ebc40135558ea886e35f7bd90b3f45"
    "0b19a44da468286fa12d0abbb781640a095b013687a3ea6115f4e588ea951774"
);

pub(crate) const DEBUG_TICKET_MODULUS: [u8; 256] = hex!(
    "cbda828bb19c9fcd0b6ebe65e6857b2985b1566716d8ebd14268500101042437"
    "7387879a927dcd52c23aa380b6e8508113e5ecdeda5d38b33d9bfa4a610200f1"
    "c2c8687f1bce09dd049564bda59a22149e3ea0337331d3936044b09c6501f8b8"
    "79e95e8a160dc63f1b7d5f3b7e64aae15127389129b4b113c12cb7965c48e489"
    "e858a53486fe2111766e0124cb5f8336998732cbacf56e464a6cd2cd65272cd1"
    "46303f31aa399a44be5e91935182f865f3665d06107c9ee38d9103ee58548b30"
    "1a9e01db376b893dc4e6c74ebea25acf0d28e7c7b312998de771939dd1e3d66b"
    "d437c0d57d8bef33e527ba04cfd062619cd07e38c1c7e6704920715cc6357615"
);

pub(crate) const DEBUG_TMD_SIGNATURE: [u8; 256] = hex!(
    "5b02a6865de2370bfb79362fde0e40b603581ed794aa6a3eb3c30943aa0bbdde"
    "6940c0192909b6e9a2161a77651172690b4cbb747746c25e827c808b7f561e51"
    "3aab6a1bebce058d2f477d8027e808ea9a00415ca032bb9f4ce8159420f2e908"
    "ab8250ae005659e4e8277c8ffb061919df613e84295b1d3076f508987d598f6d"
    "940d0f37f92c3fae6fb35ecd3de5f1860df1d1459b98a33a86dc4b0e1c68fb61"
    "f470d57c42358e96b288329b529be9a55b170c8a946bf648457651d35076c32d"
    "c4287526b852db66e378a21c8116e41408bad89418ea4d09a88873675ef42c67"
    "3881594b762f666f20bb0117b1ff1364e7144279691519502d6d4e1e626e78b9"
);

pub(crate) const DEBUG_TMD_MODULUS: [u8; 256] = hex!(
    "c3d9a5f3c25d16d264ad2c0cb7e65c506d076305326ed9cdeb3a5f23b03f3880"
    "3f6096dcccdbe3d46e9a007b25bef959e7904add10f6120099c6fd3c80be9bdf"
    "745a0459b22a7c0cb4e773d704f42b779a69ac9fda4e65f13c3038984e9467e3"
    "a9112d815e53f575d9275287fb9810982f6230935eafebc03a64536b602e1722"
    "25975f648b1067c0149cbe8f1e15f573a750047f34eb0203324175204a407c79"
    "dde429d660732e02d47987f1335aaa95fb550d290da2cfc604b78a63ca645287"
    "aaebe07d6f6cdf0e6ff1c4c2606cc47729031e6b9c3ca3ed2db4f0588150b26e"
    "66db99ac4477a6fe806e08faeac5279271ffcf29b113eb1450d181d8bf4805bd"
);

pub(crate) const DEBUG_DEV_SIGNATURE: [u8; 256] = hex!(
    "9272bbbd156c59ab4d880d8df2a869f777dbdb5a27fcb371224e06bd138562ad"
    "870c77d2f1696e41a701d03aef5bb15456c493a96610ff8e3e617b42f3635832"
    "26ad2b8f9ee47ecfac0d02fee0a7d1ed0c6e7e5ab4045c8dfc66441d6db40e40"
    "e71e820de99db270af5f270d474a9f4fe7db81081d1ef0dcec2aec8e3daf60d0"
    "aadd0b0c3e9ec049eef6070ec39792280ac48bf81f4b16560dfb40f2c92af2ce"
    "8f3e1c443d85e6630916e2779a9229478e4e7dfb2216a93dd9ec2dd6c3105015"
    "f6998d65b50476221dca37e245c66049a5540a475b6327d49762ad529e23c274"
    "cf13fa78140b6a8ffa57c0c695248316fc19bc952bd24a3551835ac7c5a95fec"
);

pub(crate) const DEBUG_DEV_PUBLIC_KEY: [u8; 60] = hex!(
    "008cf95d1a80db01b2fd6168e0804aaf95eaf275696e4084172cce744205009b"
    "e0200cc947684938fb1454354680abdbed0bbf49ba82d08a8ca571bf"
);

// AES-128 common keys.

pub(crate) const RETAIL_COMMON_KEY: [u8; 16] = hex!("ebe42a225e8593e448d9c5457381aaf7");

pub(crate) const KOREAN_COMMON_KEY: [u8; 16] = hex!("63b82bb4f4614e2e13f2fefbba4c9b7e");

pub(crate) const DEBUG_COMMON_KEY: [u8; 16] = hex!("a1604a6a7123b529ae8bec32c816fcaa");
